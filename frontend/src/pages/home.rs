use log::warn;
use yew::prelude::*;

use crate::components::embeds::{FormEmbedScript, WidgetFrame};
use crate::components::icons::{ArrowRightIcon, ShieldCheckIcon, TrendingUpIcon, UsersIcon};
use crate::components::page_shell::{PageShell, ShellWidth};
use crate::config;
use crate::content::{Benefit, BenefitIcon, BENEFITS};
use crate::dom;

fn benefit_card(benefit: &Benefit) -> Html {
    let icon = match benefit.icon {
        BenefitIcon::Users => html! { <UsersIcon /> },
        BenefitIcon::ShieldCheck => html! { <ShieldCheckIcon /> },
        BenefitIcon::TrendingUp => html! { <TrendingUpIcon /> },
    };

    html! {
        <div class="card benefit">
            <div class="benefit-icon">{ icon }</div>
            <h3>
                { benefit.headline_lead }
                <span class="accent">{ benefit.highlight }</span>
                { benefit.headline_tail }
            </h3>
            <p class="benefit-body">{ benefit.body }</p>
            <p class="benefit-closer">{ benefit.closer }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scroll_to_survey = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = dom::scroll_to_section(config::SURVEY_SECTION_ID) {
            warn!("Could not scroll to survey: {}", e);
        }
    });

    html! {
        <PageShell width={ShellWidth::Wide}>
            <div class="home">
                <p class="warning-banner">
                    {"⚠️ WARNING: THIS AI IS ONLY FOR MEDICAL PRACTICE OWNERS ABLE TO HANDLE 50+ NEW PATIENTS A MONTH!"}
                </p>

                <section class="home-hero">
                    <h1>
                        {"Our new AI will "}
                        <span class="accent">{"GET YOU 50+ HIGH-VALUE PATIENTS"}</span>
                        {" In Your Chair Every Month"}
                    </h1>
                    <p class="hero-tagline">{"While You Sleep!"}</p>
                </section>

                <section id={config::SURVEY_SECTION_ID} class="survey-section">
                    <WidgetFrame
                        src={config::SURVEY_WIDGET_URL}
                        id={config::SURVEY_WIDGET_ID}
                        title="survey"
                        min_height={500}
                        scrolling={false}
                        framed={false}
                    />
                    <FormEmbedScript />
                </section>

                <section class="benefits">
                    <h2>{"HERE ARE SOME REASONS WHY YOU SHOULD CHOOSE TO WORK WITH US"}</h2>
                    <div class="benefit-grid">
                        { for BENEFITS.iter().map(benefit_card) }
                    </div>
                </section>

                <section class="final-cta">
                    <h2>{"YES, I WANT AN AI TEAM FOR MY PRACTICE"}</h2>
                    <p>{"Limited Spots Available"}</p>
                    <button class="cta-button" onclick={scroll_to_survey}>
                        {"Get Started Now"}
                        <ArrowRightIcon />
                    </button>
                </section>
            </div>

            <style>
                {r#"
                .home {
                    padding-top: 0;
                }

                .warning-banner {
                    margin: 0 0 1.5rem;
                    text-align: center;
                    font-weight: 600;
                    color: var(--warning);
                }

                .home-hero {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .home-hero h1 {
                    margin: 0 0 1rem;
                    font-size: 2.25rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 1.25;
                    color: var(--text-strong);
                }

                .hero-tagline {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                    color: var(--text-body);
                }

                .survey-section {
                    margin-bottom: 4rem;
                    scroll-margin-top: 2rem;
                }

                .benefits {
                    margin-bottom: 4rem;
                }

                .benefits h2 {
                    margin: 0 0 3rem;
                    text-align: center;
                    font-size: 1.875rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    color: var(--text-strong);
                }

                .benefit-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .benefit {
                    padding: 2rem 1.5rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .benefit:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .benefit-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: var(--accent-soft);
                    color: var(--accent);
                }

                .benefit-icon svg {
                    width: 2rem;
                    height: 2rem;
                }

                .benefit h3 {
                    margin: 0 0 1rem;
                    font-size: 1.5rem;
                    font-weight: 800;
                    line-height: 1.25;
                    color: var(--text-strong);
                }

                .benefit-body {
                    margin: 0 0 1rem;
                    font-size: 1rem;
                    line-height: 1.625;
                    color: var(--text-body);
                }

                .benefit-closer {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .final-cta {
                    margin-bottom: 4rem;
                    padding: 4rem 1.5rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    background: linear-gradient(to bottom right, #0ea5e9, #0284c7, #4f46e5);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .final-cta h2 {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 800;
                    color: #ffffff;
                }

                .final-cta p {
                    margin: 0 0 2rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: rgba(255, 255, 255, 0.95);
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1.75rem 2.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #ffffff;
                    color: #0284c7;
                    font-size: 1.25rem;
                    font-weight: 800;
                    cursor: pointer;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.15s ease;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                }

                .cta-button svg {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                @media (min-width: 768px) {
                    .benefit-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .home-hero h1 {
                        font-size: 3.75rem;
                    }

                    .benefits h2,
                    .final-cta h2 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </PageShell>
    }
}
