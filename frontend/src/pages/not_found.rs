use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_shell::{PageShell, ShellWidth};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <PageShell width={ShellWidth::Narrow}>
            <section class="not-found">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Back to Clinic Lab AI"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .not-found {
                    text-align: center;
                    padding: 4rem 0;
                }

                .not-found h1 {
                    margin: 0 0 1rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .not-found p {
                    margin: 0 0 2rem;
                    color: var(--text-muted);
                }

                .not-found-link {
                    color: var(--accent);
                    font-weight: 600;
                }
                "#}
            </style>
        </PageShell>
    }
}
