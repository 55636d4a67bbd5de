use yew::prelude::*;

use crate::components::embeds::VideoFrame;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::page_shell::{PageShell, ShellWidth};
use crate::components::testimonial_gallery::TestimonialGallery;
use crate::config;
use crate::content::{FAQ_ENTRIES, TESTIMONIALS};

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    html! {
        <PageShell width={ShellWidth::Wide}>
            <section class="thanks-hero">
                <h1>{"You're Booked!"}</h1>
                <h2>{"REQUIRED: MUST WATCH THIS VIDEO BEFORE YOUR CALL"}</h2>
                <p>
                    {"Watch below to find out how to use A.I. to bring in 10-20 extra patients in as soon as "}
                    <u>{"7 days"}</u>
                </p>
            </section>

            <section class="thanks-block">
                <div class="card">
                    <VideoFrame src={config::EXPLAINER_VIDEO_URL} ratio={config::EXPLAINER_VIDEO_RATIO} />
                </div>
            </section>

            <div class="divider"></div>

            <section class="thanks-block receptionist">
                <h2>{"Next, Try Out Our "}<em>{"A.I. Receptionist"}</em></h2>
                <p>
                    {"See the system "}<u>{"NOW"}</u>{" by calling Ashley, one of our demo AI avatars"}
                </p>
                <a href={config::DEMO_PHONE_HREF} class="phone-link">
                    <span class="phone-arrow">{"➟"}</span>
                    <span>{ config::DEMO_PHONE_DISPLAY }</span>
                </a>
                <div>
                    <a href={config::DEMO_PHONE_HREF} class="call-button">{"Tap Here to Call"}</a>
                </div>
            </section>

            <div class="divider"></div>

            <section class="thanks-block calendar">
                <h2>{"LAST STEP: Add Your Appointment to Your "}<em>{"Calendar!"}</em></h2>
                <p>{"(Google, Outlook, Apple, etc.)"}</p>
                <img src={config::CALENDAR_GUIDE_IMAGE_URL} alt="Calendar" width="1200" height="800" loading="lazy" />
            </section>

            <div class="divider"></div>

            <section class="thanks-block">
                <h2 class="section-title">{"Hear From Top Doctors"}</h2>
                <TestimonialGallery testimonials={TESTIMONIALS} />
            </section>

            <div class="divider"></div>

            <section class="thanks-block">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <FaqAccordion entries={FAQ_ENTRIES} />
            </section>

            <style>
                {r#"
                .thanks-hero {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .thanks-hero h1 {
                    margin: 0 0 1.5rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    color: var(--text-strong);
                }

                .thanks-hero h2 {
                    margin: 0 0 1rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .thanks-hero p {
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    font-style: italic;
                    color: var(--text-muted);
                }

                .thanks-block {
                    margin-bottom: 4rem;
                }

                .section-title {
                    margin: 0 0 3rem;
                    text-align: center;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .receptionist,
                .calendar {
                    text-align: center;
                }

                .receptionist h2,
                .calendar h2 {
                    margin: 0 0 1.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    line-height: 1.25;
                    color: var(--text-strong);
                }

                .receptionist p {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    line-height: 1.625;
                    color: var(--text-muted);
                }

                .phone-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: var(--accent);
                    transition: color 0.15s ease;
                }

                .phone-link:hover {
                    color: var(--accent-strong);
                }

                .phone-arrow {
                    font-size: 2.25rem;
                    transition: transform 0.15s ease;
                }

                .phone-link:hover .phone-arrow {
                    transform: translateX(0.25rem);
                }

                .call-button {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    background: var(--accent);
                    color: #ffffff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(14, 165, 233, 0.25);
                    transition: background-color 0.15s ease;
                }

                .call-button:hover {
                    background: var(--accent-strong);
                }

                .calendar p {
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    color: var(--text-muted);
                }

                .calendar img {
                    display: block;
                    width: 100%;
                    max-width: 56rem;
                    height: auto;
                    margin: 0 auto;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                @media (min-width: 1024px) {
                    .thanks-hero h1 {
                        font-size: 3.75rem;
                    }

                    .thanks-hero h2 {
                        font-size: 2.25rem;
                    }

                    .receptionist h2 {
                        font-size: 3rem;
                    }

                    .phone-link {
                        font-size: 3rem;
                    }

                    .phone-arrow {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </PageShell>
    }
}
