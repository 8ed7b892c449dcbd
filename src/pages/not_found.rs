use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="nav-start">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                    background: #050505;
                    color: #fff;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                    color: #00ff9d;
                    text-shadow: 0 0 24px rgba(0, 255, 157, 0.45);
                }
                .not-found p {
                    color: #9ca3af;
                }
                .not-found .nav-start {
                    background: #fff;
                    color: #000;
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .not-found .nav-start:hover {
                    background: #00ff9d;
                }
                "#}
            </style>
        </div>
    }
}
