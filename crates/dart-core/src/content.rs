//! Static page content shared by the landing, team and robots pages.

/// A robot shown in the project grid and on the robots page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub name: &'static str,
    pub image: &'static str,
    /// Whether the landing card links to the full robots page.
    pub featured: bool,
}

/// Robots in project-grid order.
pub const ROBOTS: &[Robot] = &[
    Robot {
        name: "Storm Surge",
        image: "images/stormsurge.png",
        featured: false,
    },
    Robot {
        name: "Pinhead Larry",
        image: "images/pinhead.png",
        featured: true,
    },
    Robot {
        name: "Eggbeater",
        image: "images/eggbeater.png",
        featured: false,
    },
];

/// A founding member featured on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founder {
    pub name: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
}

pub const FOUNDERS: [Founder; 2] = [
    Founder {
        name: "Trevor Ierardi",
        photo: "images/Trevor Ierardi.png",
        bio: "Trevor was the operations lead since DART's inception, driving logistics \
              and strategy for all robot builds and competitions.",
    },
    Founder {
        name: "Nick Cowen",
        photo: "images/Nick Cowen.png",
        bio: "Nick leads the Darts Organization and mechanical team with a focus on design \
              innovation and battle-ready durability for our flagship robots.",
    },
];

/// Club blurb used on the landing and about pages.
pub const ABOUT_TEXT: &str = "Founded in 2022, DART Robotics builds combat robots for competitions \
    like RoboGames, AutoNav, and VEX-style arena matches. We bring together mechanical, \
    software, and electrical engineers from all disciplines.";

pub const TAGLINE: &str = "Innovating through destruction – Virginia Tech’s Combat Robotics Team";
