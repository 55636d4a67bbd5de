use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;

/// Light palette on `:root`, dark palette once the dark class is on `<html>`.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --page-bg: #fafafa;
                --page-glow: rgba(229, 229, 229, 0.2);
                --text-strong: #171717;
                --text-body: #404040;
                --text-muted: #525252;
                --text-faint: #737373;
                --card-bg: rgba(255, 255, 255, 0.8);
                --card-border: #e5e5e5;
                --control-bg: #ffffff;
                --control-border: #d4d4d4;
                --control-hover: #f5f5f5;
                --media-bg: #f5f5f5;
                --accent: #0ea5e9;
                --accent-strong: #0284c7;
                --accent-soft: rgba(14, 165, 233, 0.1);
                --warning: #d97706;
            }

            :root.dark {
                --page-bg: #0a0a0a;
                --page-glow: rgba(23, 23, 23, 0.2);
                --text-strong: #ffffff;
                --text-body: #d4d4d4;
                --text-muted: #a3a3a3;
                --text-faint: #737373;
                --card-bg: rgba(23, 23, 23, 0.8);
                --card-border: rgba(38, 38, 38, 0.5);
                --control-bg: #171717;
                --control-border: #404040;
                --control-hover: #262626;
                --media-bg: #262626;
                --accent-soft: rgba(14, 165, 233, 0.2);
                --warning: #fbbf24;
            }

            body {
                margin: 0;
                background: var(--page-bg);
                color: var(--text-strong);
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                transition: background-color 0.2s ease, color 0.2s ease;
            }

            a {
                color: inherit;
            }
        "#)} />
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ShellWidth {
    /// Booking page.
    Narrow,
    /// Pre-call page.
    Medium,
    /// Home and thank-you pages.
    Wide,
}

impl ShellWidth {
    fn class(self) -> &'static str {
        match self {
            ShellWidth::Narrow => "shell-content narrow",
            ShellWidth::Medium => "shell-content medium",
            ShellWidth::Wide => "shell-content wide",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub width: ShellWidth,
    #[prop_or(true)]
    pub footer: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Background, logo, theme toggle and footer shared by every page.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="page-shell">
            <div class="shell-backdrop"></div>
            <div class="shell-glows">
                <div class="glow glow-top"></div>
                <div class="glow glow-bottom"></div>
                <div class="glow glow-center"></div>
            </div>

            <div class="shell-logo">
                <img src={config::LOGO_PATH} alt="Clinic Lab AI Logo" width="40" height="40" />
                <h1>
                    <span class="logo-name">{"Clinic Lab "}</span>
                    <span class="logo-accent">{"AI"}</span>
                </h1>
            </div>

            <ThemeToggle />

            <div class={props.width.class()}>
                { for props.children.iter() }
                {
                    if props.footer {
                        html! { <Footer /> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .page-shell {
                    min-height: 100vh;
                    position: relative;
                    background: var(--page-bg);
                    transition: background-color 0.2s ease;
                }

                .shell-backdrop {
                    position: fixed;
                    inset: 0;
                    background: radial-gradient(ellipse at center, var(--page-glow), var(--page-bg) 70%);
                    pointer-events: none;
                }

                .shell-glows {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    animation: glow-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                .glow-top {
                    top: -10rem;
                    right: -10rem;
                    width: 20rem;
                    height: 20rem;
                    background: rgba(14, 165, 233, 0.2);
                }

                .glow-bottom {
                    bottom: -10rem;
                    left: -10rem;
                    width: 20rem;
                    height: 20rem;
                    background: rgba(99, 102, 241, 0.2);
                    animation-delay: 1s;
                }

                .glow-center {
                    top: 50%;
                    left: 50%;
                    width: 16rem;
                    height: 16rem;
                    transform: translate(-50%, -50%);
                    background: rgba(14, 165, 233, 0.1);
                    animation-delay: 0.5s;
                }

                @keyframes glow-pulse {
                    50% { opacity: 0.5; }
                }

                .shell-logo {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    display: flex;
                    align-items: flex-end;
                    gap: 0.25rem;
                }

                .shell-logo img {
                    width: 2.5rem;
                    height: 2.5rem;
                }

                .shell-logo h1 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }

                .logo-name {
                    color: var(--text-strong);
                }

                .logo-accent {
                    color: var(--accent);
                }

                .shell-content {
                    position: relative;
                    z-index: 10;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .shell-content.narrow {
                    max-width: 64rem;
                }

                .shell-content.medium {
                    max-width: 72rem;
                }

                .shell-content.wide {
                    max-width: 80rem;
                }

                .card {
                    background: var(--card-bg);
                    backdrop-filter: blur(24px);
                    border: 1px solid var(--card-border);
                    border-radius: 0.75rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }

                .divider {
                    margin-bottom: 4rem;
                    border-top: 1px solid var(--card-border);
                }

                .accent {
                    color: var(--accent);
                }

                .strong {
                    font-weight: 600;
                    color: var(--text-strong);
                }

                .widget-frame {
                    width: 100%;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    background: var(--card-bg);
                    border: 1px solid var(--card-border);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .video-box {
                    position: relative;
                    width: 100%;
                    height: 0;
                }

                .video-box iframe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                .thumbnail {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    background: var(--media-bg);
                }

                .play-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.2);
                    transition: background-color 0.15s ease;
                }

                .thumbnail:hover .play-overlay {
                    background: rgba(0, 0, 0, 0.3);
                }

                .play-button {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #171717;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .play-button svg {
                    width: 2rem;
                    height: 2rem;
                    margin-left: 0.25rem;
                }

                .site-footer {
                    text-align: center;
                    padding-top: 2rem;
                    border-top: 1px solid var(--card-border);
                }

                .site-footer .brand {
                    color: var(--text-muted);
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .site-footer .copyright {
                    font-size: 0.875rem;
                    color: var(--text-faint);
                }

                @media (min-width: 640px) {
                    .shell-content {
                        padding: 5rem 1.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .shell-content {
                        padding: 6rem 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="brand">{"Clinic Lab AI"}</p>
            <p class="copyright">{"© 2025 Clinic Lab AI. All rights reserved."}</p>
        </footer>
    }
}
