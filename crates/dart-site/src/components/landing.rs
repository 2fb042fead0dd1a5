//! Landing page.

use dart_core::content::{ABOUT_TEXT, FOUNDERS, ROBOTS, TAGLINE};
use dart_core::sponsors::LANDING_LOGOS;
use dart_core::{Mailto, RevealController, RevealPlan, RevealTarget};
use dioxus::prelude::*;

use crate::hooks::{use_scroll_to_top, use_watch};
use crate::route::Route;

use super::{use_site_config, MediaCarousel};

/// Landing page with scroll-revealed sections.
///
/// Only the about text, the first founder and the project cards are
/// observed; the first founder drives the rest of the founders row.
#[component]
pub fn Landing() -> Element {
    use_scroll_to_top();

    let config = use_site_config();
    let assets = config.assets();
    let reveal = use_watch(|| RevealController::new(RevealPlan::landing(ROBOTS.len())));

    let reveal_class =
        move |target: RevealTarget, base: &str| reveal.read(|c| c.class_list(target, base));

    let [first, second] = FOUNDERS;
    let first_photo = assets.resolve(first.photo);
    let second_photo = assets.resolve(second.photo);
    let hero_logo = assets.resolve("images/DART.svg");
    let top_image = assets.resolve("images/IMG_6262.png");
    let about_image = assets.resolve("images/IMG_9097.png");
    let join_style = format!(
        "background-image: url({});",
        assets.resolve("images/team.jpg")
    );
    let join_href = Mailto::new(&config.contact_email).to_href();
    let email = config.contact_email.clone();

    let cards: Vec<_> = ROBOTS
        .iter()
        .enumerate()
        .map(|(index, robot)| {
            let target = RevealTarget::ProjectCard(index);
            (target, reveal_class(target, "project-card"), *robot, assets.resolve(robot.image))
        })
        .collect();
    let logos: Vec<_> = LANDING_LOGOS
        .iter()
        .map(|(src, alt)| (assets.resolve(src), *alt))
        .collect();

    rsx! {
        div {
            id: "Landing",

            div {
                class: "top-image-wrapper",
                img { src: "{top_image}", alt: "Top Robotics Scene", class: "top-banner" }
                div {
                    class: "hero-overlay",
                    img { src: "{hero_logo}", alt: "DART Logo", class: "hero-logo small" }
                    h1 { "DART Robotics" }
                    p { "{TAGLINE}" }
                }
            }

            section {
                class: "about-section",
                img { src: "{about_image}", alt: "About the team", class: "about-image" }
                div {
                    class: reveal_class(RevealTarget::AboutText, "about-overlay-text"),
                    onvisible: reveal.on_visible(RevealTarget::AboutText),
                    h2 { "About the Team" }
                    p { "{ABOUT_TEXT}" }
                    Link { to: Route::About {}, class: "about-btn", "Learn More" }
                }
            }

            section {
                class: "projects section-colored",
                h2 { "Robots" }
                div {
                    class: "project-grid",
                    for (target, card_class, robot, image) in cards {
                        div {
                            key: "{robot.name}",
                            class: "{card_class}",
                            onvisible: reveal.on_visible(target),
                            img { src: "{image}", alt: "{robot.name}" }
                            h3 { "{robot.name}" }
                            if robot.featured {
                                Link { to: Route::Robots {}, class: "about-btn", "View Full Robot Page" }
                            }
                        }
                    }
                }
            }

            section { class: "spacer-section" }

            section {
                class: "team-preview section-colored",
                h2 { "Meet the Founders" }
                div {
                    class: "team-row",
                    div {
                        class: "founder-block",
                        div {
                            class: reveal_class(RevealTarget::FoundersLeftText, "founders-left-text"),
                            p { "{first.bio}" }
                        }
                        div {
                            class: reveal_class(RevealTarget::FirstFounder, "team-member"),
                            onvisible: reveal.on_visible(RevealTarget::FirstFounder),
                            img { src: "{first_photo}", alt: "{first.name}" }
                            h3 { "{first.name}" }
                        }
                    }
                    div {
                        class: "founder-block",
                        div {
                            class: reveal_class(RevealTarget::SecondFounder, "team-member"),
                            img { src: "{second_photo}", alt: "{second.name}" }
                            h3 { "{second.name}" }
                        }
                        div {
                            class: reveal_class(RevealTarget::FoundersRightText, "founders-right-text"),
                            p { "{second.bio}" }
                        }
                    }
                }
                Link { to: Route::Team {}, class: "about-btn", "Full Team Roster" }
            }

            section {
                class: "media",
                h2 { "Gallery & Media" }
                MediaCarousel {}
            }

            section {
                class: "sponsors section-colored",
                h2 { "Our Sponsors" }
                h4 {
                    "We are proudly supported by industry partners and local businesses who help make our robots possible."
                }
                div {
                    class: "sponsor-logos",
                    for (src, alt) in logos {
                        img { key: "{src}", src: "{src}", alt: "{alt}", class: "sponsor-logo" }
                    }
                }
                div {
                    class: "see-more",
                    Link { to: Route::Sponsors {}, class: "about-btn", "See More" }
                }
            }

            section {
                class: "join-section",
                style: "{join_style}",
                div {
                    class: "join-panel",
                    h2 { "Want To Join Us?" }
                    p {
                        "DART Robotics is open to students from all majors interested in combat robotics — no experience required. Join us to learn, build, and compete."
                    }
                    a { href: "{join_href}", class: "about-btn", "{email}" }
                }
            }
        }
    }
}
