use yew::prelude::*;

use crate::components::embeds::{FormEmbedScript, VideoFrame, WidgetFrame};
use crate::components::page_shell::{PageShell, ShellWidth};
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::config;
use crate::content::{PRE_CALL_CHECKLIST, TESTIMONIALS};

#[function_component(PreCall)]
pub fn pre_call() -> Html {
    html! {
        <PageShell width={ShellWidth::Medium} footer={false}>
            <div class="pre-call">
                <section class="pre-call-heading">
                    <h1>{"Pre‑Call Success Page"}</h1>
                    <p>
                        {"Follow the simple steps below so you're fully prepared to "}
                        <span class="strong">{"get maximum value"}</span>
                        {" from your strategy call."}
                    </p>
                </section>

                <section class="step">
                    <p class="step-label">{"Step 1"}</p>
                    <h2>{"MUST WATCH BEFORE YOUR CALL"}</h2>
                    <p class="step-intro">
                        {"Watch below to find out how to add "}
                        <span class="strong">{"$1M+ to your company's annual revenue"}</span>
                        {"."}
                    </p>
                    <div class="card">
                        <VideoFrame src={config::EXPLAINER_VIDEO_URL} ratio={config::EXPLAINER_VIDEO_RATIO} />
                    </div>
                </section>

                <section class="step">
                    <p class="step-label">{"Step 2"}</p>
                    <h2>{"PRE‑CALL CHECKLIST"}</h2>
                    <p class="step-intro">
                        {"Take 2–3 minutes to complete this checklist so we can make your call as actionable and personalized as possible."}
                    </p>
                    <div class="card checklist">
                        <ul>
                            { for PRE_CALL_CHECKLIST.iter().enumerate().map(|(index, item)| html! {
                                <li key={index}>
                                    <span class="checklist-number">{ (index + 1).to_string() }</span>
                                    <span>
                                        { item.lead }
                                        <span class="checklist-emphasis">{ item.emphasis }</span>
                                        { item.tail }
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>

                <section class="step">
                    <p class="step-label">{"Step 3"}</p>
                    <h2>{"CHECK OUT OUR TESTIMONIALS & RESULTS"}</h2>
                    <p class="step-intro">
                        {"Slide through a few of the practices using AI to transform patient acquisition and retention."}
                    </p>
                    <TestimonialCarousel testimonials={TESTIMONIALS} />
                </section>

                <section class="step">
                    <div class="pre-call-cta">
                        <h2>{"WHAT ARE YOU WAITING FOR?"}</h2>
                        <p class="cta-lead">
                            {"BOOK A FREE STRATEGY CALL WITH US BELOW TO "}
                            <span class="cta-claim">{"CLAIM YOUR MARKET"}</span>
                        </p>
                        <p class="cta-note">{"Reserve your spot now—once your market is taken, it's gone."}</p>
                    </div>
                    <WidgetFrame
                        src={config::BOOKING_WIDGET_URL}
                        id="cliniclab-precall-booking-widget"
                        min_height={800}
                    />
                    <FormEmbedScript />
                </section>
            </div>

            <style>
                {r#"
                .pre-call {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }

                .pre-call-heading {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .pre-call-heading h1 {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    color: var(--text-strong);
                }

                .pre-call-heading p,
                .step-intro {
                    margin: 0;
                    max-width: 48rem;
                    font-size: 1.125rem;
                    color: var(--text-muted);
                }

                .step {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .step-label {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #38bdf8;
                }

                .step h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .checklist {
                    padding: 1.5rem;
                }

                .checklist ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 1rem;
                    color: var(--text-body);
                }

                .checklist li {
                    display: flex;
                    gap: 0.75rem;
                }

                .checklist-number {
                    margin-top: 0.25rem;
                    flex-shrink: 0;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid var(--accent);
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: var(--accent);
                }

                .checklist-emphasis {
                    font-weight: 600;
                }

                .pre-call-cta {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .pre-call-cta h2 {
                    margin: 0 0 0.75rem;
                    font-size: 1.875rem;
                    font-weight: 800;
                }

                .cta-lead {
                    margin: 0 0 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--text-body);
                }

                .cta-claim {
                    font-style: italic;
                    color: var(--accent);
                }

                .cta-note {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }

                @media (min-width: 1024px) {
                    .pre-call-heading h1 {
                        font-size: 3rem;
                    }

                    .step h2 {
                        font-size: 2.25rem;
                    }

                    .checklist {
                        padding: 1.5rem 2rem;
                    }
                }
                "#}
            </style>
        </PageShell>
    }
}
