use yew::prelude::*;

use crate::components::embeds::{FormEmbedScript, WidgetFrame};
use crate::components::page_shell::{PageShell, ShellWidth};
use crate::config;

#[function_component(Book)]
pub fn book() -> Html {
    html! {
        <PageShell width={ShellWidth::Narrow} footer={false}>
            <section class="book-heading">
                <h1>
                    {"Book a "}
                    <span class="book-highlight">{"Direct AI Patient System Call"}</span>
                    {" Below"}
                </h1>
                <p>
                    {"See how AI will "}
                    <span class="book-highlight strong-accent">{"change the game"}</span>
                    {" in your dental practice."}
                </p>
            </section>

            <WidgetFrame
                src={config::BOOKING_WIDGET_URL}
                id="cliniclab-booking-widget-book-page"
                min_height={800}
            />
            <FormEmbedScript />

            <p class="book-note">
                {"After booking, you'll receive a confirmation email with all of your call details."}
            </p>

            <style>
                {r#"
                .book-heading {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .book-heading h1 {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    color: var(--text-strong);
                }

                .book-heading p {
                    margin: 1rem 0 0;
                    font-size: 1.125rem;
                    color: var(--text-body);
                }

                .book-highlight {
                    color: #38bdf8;
                }

                .strong-accent {
                    font-weight: 600;
                }

                .book-note {
                    margin: 4rem 0 0;
                    text-align: center;
                    font-size: 0.875rem;
                    color: var(--text-faint);
                }

                @media (min-width: 1024px) {
                    .book-heading {
                        margin-bottom: 3.5rem;
                    }

                    .book-heading h1 {
                        font-size: 3rem;
                    }

                    .book-heading p {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </PageShell>
    }
}
