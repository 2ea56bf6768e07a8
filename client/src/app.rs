//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::route_guard::{GuestRoute, ProtectedRoute};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage, requests::RequestsPage,
    reset_password::ResetPasswordPage, search::SearchPage,
};
use crate::session::{SessionService, cross_tab};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session service, bridges storage events from other tabs,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionService::browser();
    cross_tab::install(session.channel().clone());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/medidata.css"/>
        <Title text="MediData"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }/>
                    <Route path=StaticSegment("register") view=|| view! { <GuestRoute><RegisterPage/></GuestRoute> }/>
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <GuestRoute><ForgotPasswordPage/></GuestRoute> }
                    />
                    <Route
                        path=StaticSegment("reset-password")
                        view=|| view! { <GuestRoute><ResetPasswordPage/></GuestRoute> }
                    />
                    <Route path=StaticSegment("dashboard") view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("search") view=|| view! { <ProtectedRoute><SearchPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("requests") view=|| view! { <ProtectedRoute><RequestsPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }/>
                </Routes>
            </main>
        </Router>
    }
}
