//! Sponsors page.

use dart_core::sponsors::SPONSORS;
use dart_core::{group_by_tier, Mailto};
use dioxus::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::route::Route;

use super::use_site_config;

/// Sponsor listing grouped by tier, with sponsorship call-to-action links.
#[component]
pub fn Sponsors() -> Element {
    use_scroll_to_top();

    let config = use_site_config();
    let assets = config.assets();
    let mailto = Mailto::sponsor_inquiry(&config.sponsor_email).to_href();

    let tiers: Vec<_> = group_by_tier(SPONSORS)
        .into_iter()
        .map(|(tier, members)| {
            let cards: Vec<_> = members
                .into_iter()
                .map(|s| (*s, s.logo_src(&assets), s.logo_alt(), s.link_label()))
                .collect();
            (tier, cards)
        })
        .collect();

    rsx! {
        div {
            class: "sponsors-page",

            section {
                class: "sponsors-hero",
                h1 { "Thank You to Our Sponsors & Partners" }
                p {
                    "Our robots are possible thanks to generous support from sponsors and campus partners. "
                    "Your contributions fuel student learning, competition travel, parts and materials, "
                    "and outreach to the community."
                }
                div {
                    class: "cta-row",
                    a { class: "btn primary", href: "{mailto}", "Become a Sponsor" }
                    Link { class: "btn ghost", to: Route::Robots {}, "See Our Robots" }
                }
            }

            section {
                class: "sponsor-grid",
                for (tier, cards) in tiers {
                    div {
                        key: "{tier}",
                        class: "tier-block",
                        h2 { class: "tier-heading", "{tier}" }
                        div {
                            class: "grid",
                            for (sponsor, logo, alt, label) in cards {
                                a {
                                    key: "{sponsor.name}",
                                    href: "{sponsor.url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    class: "card",
                                    "aria-label": "{label}",
                                    img {
                                        src: "{logo}",
                                        alt: "{alt}",
                                        "loading": "lazy",
                                        "decoding": "async",
                                    }
                                    div { class: "card-name", "{sponsor.name}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "closing-cta",
                h2 { "Support the Team" }
                p {
                    "Interested in joining as a sponsor? We offer recognition across events, social, and our website!"
                }
                a { class: "btn primary", href: "{mailto}", "Become a Sponsor" }
            }
        }
    }
}
