//! Sponsor listings.

use crate::assets::AssetBase;

/// Recognition level shown as a heading on the sponsors page.
pub type SponsorTier = &'static str;

/// One supporting organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    pub url: &'static str,
    /// Logo path relative to the public base.
    pub logo: &'static str,
    pub tier: SponsorTier,
}

impl Sponsor {
    /// Accessible label for the sponsor's new-tab link.
    pub fn link_label(&self) -> String {
        format!("{} — opens in new tab", self.name)
    }

    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.name)
    }

    pub fn logo_src(&self, assets: &AssetBase) -> String {
        assets.resolve(self.logo)
    }
}

/// Current sponsors, in display order.
pub const SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "Calders Coffee Cafe",
        url: "https://calderscoffeecafe.com/",
        logo: "images/CaldersLogo.jpg",
        tier: "Sponsors",
    },
    Sponsor {
        name: "Undergraduate Student Senate of Virginia Tech",
        url: "https://uss.vt.edu/",
        logo: "images/USSVT.png",
        tier: "Sponsors",
    },
];

/// Logos shown in the landing page's sponsor strip.
pub const LANDING_LOGOS: &[(&str, &str)] = &[
    ("icons/SponsorLogo.svg", "Sponsor Logo"),
    ("icons/SponsorLogo2.svg", "Sponsor Logo2"),
];

/// Groups sponsors by tier. Tiers keep the order in which they first
/// appear; sponsors keep their order within a tier.
pub fn group_by_tier(sponsors: &[Sponsor]) -> Vec<(SponsorTier, Vec<&Sponsor>)> {
    let mut groups: Vec<(SponsorTier, Vec<&Sponsor>)> = Vec::new();
    for sponsor in sponsors {
        match groups.iter_mut().find(|(tier, _)| *tier == sponsor.tier) {
            Some((_, members)) => members.push(sponsor),
            None => groups.push((sponsor.tier, vec![sponsor])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_single_tier() {
        let groups = group_by_tier(SPONSORS);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Sponsors");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_tier_order_is_first_appearance() {
        let sponsors = [
            Sponsor { name: "A", url: "", logo: "", tier: "Gold" },
            Sponsor { name: "B", url: "", logo: "", tier: "Silver" },
            Sponsor { name: "C", url: "", logo: "", tier: "Gold" },
        ];
        let groups = group_by_tier(&sponsors);
        let tiers: Vec<_> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, ["Gold", "Silver"]);
        let gold: Vec<_> = groups[0].1.iter().map(|s| s.name).collect();
        assert_eq!(gold, ["A", "C"]);
    }

    #[test]
    fn test_labels() {
        let sponsor = &SPONSORS[0];
        assert_eq!(sponsor.link_label(), "Calders Coffee Cafe — opens in new tab");
        assert_eq!(sponsor.logo_alt(), "Calders Coffee Cafe logo");
        assert_eq!(
            sponsor.logo_src(&AssetBase::new("/Official-DART-Website")),
            "/Official-DART-Website/images/CaldersLogo.jpg"
        );
    }
}
