use log::debug;
use yew::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::content::FaqEntry;
use crate::state::accordion::{Accordion, AccordionAction};

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

/// Question list where opening one answer closes the previous one.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        debug!("Toggling FAQ entry {}", index);
                        accordion.dispatch(AccordionAction::Toggle(index));
                    })
                };
                html! {
                    <div key={index} class={classes!("card", "faq-entry", is_open.then_some("open"))}>
                        <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                            <div class="faq-question-text">
                                <h3>{ entry.question }</h3>
                                {
                                    if let Some(subtitle) = entry.subtitle {
                                        html! { <p class="faq-subtitle">{ subtitle }</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <ChevronDownIcon class="faq-chevron" />
                        </button>
                        <div class="faq-answer">
                            <p>{ entry.answer }</p>
                        </div>
                    </div>
                }
            }) }

            <style>
                {r#"
                .faq-list {
                    max-width: 56rem;
                    margin: 3rem auto 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .faq-entry {
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }

                .faq-entry:hover {
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem 1.5rem 0.625rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                    text-align: left;
                    font: inherit;
                }

                .faq-question-text {
                    flex: 1;
                }

                .faq-question h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .faq-subtitle {
                    margin: 0.125rem 0 0;
                    font-size: 1rem;
                    color: var(--text-muted);
                }

                .faq-chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    color: var(--text-faint);
                    transition: transform 0.2s ease;
                }

                .faq-entry.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }

                .faq-entry.open .faq-answer {
                    max-height: 1000px;
                    opacity: 1;
                }

                .faq-answer p {
                    margin: 0.5rem 0 0;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid var(--card-border);
                    font-size: 1.125rem;
                    line-height: 1.625;
                    color: var(--text-body);
                }
                "#}
            </style>
        </div>
    }
}
