//! Page content, loaded from JSON embedded in the host document.

use serde::Deserialize;

/// A card in the project carousel.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
	pub title: String,
	pub description: String,
	/// Image URL for the card.
	pub image: String,
	/// Optional external link.
	#[serde(default)]
	pub link: Option<String>,
}

/// A card in the story section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StoryCard {
	pub title: String,
	pub body: String,
}

/// An entry on the timeline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TimelineEntry {
	/// Free-form period label, e.g. "2021 – 2023".
	pub period: String,
	pub title: String,
	pub body: String,
}

/// Contact details offered for copying.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Contact {
	pub email: String,
	pub phone: String,
}

/// Everything the page displays.
///
/// Every field falls back to the built-in content when absent.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioData {
	pub name: String,
	pub portrait: String,
	/// Headline words, revealed one by one; only the first four are shown.
	pub words: Vec<String>,
	pub about: String,
	pub projects: Vec<Project>,
	pub story: Vec<StoryCard>,
	pub timeline: Vec<TimelineEntry>,
	pub contact: Contact,
}

fn project(title: &str, description: &str, image: &str) -> Project {
	Project {
		title: title.into(),
		description: description.into(),
		image: image.into(),
		link: None,
	}
}

impl Default for PortfolioData {
	fn default() -> Self {
		Self {
			name: "Your Name".into(),
			portrait: "assets/portrait.png".into(),
			words: ["Design", "Build", "Ship", "Repeat"]
				.into_iter()
				.map(String::from)
				.collect(),
			about: "I build interfaces that move.".into(),
			projects: vec![
				project("Atlas", "Mapping toolkit", "assets/projects/atlas.png"),
				project("Beacon", "Status dashboards", "assets/projects/beacon.png"),
				project("Cinder", "Motion studies", "assets/projects/cinder.png"),
				project("Drift", "Generative audio", "assets/projects/drift.png"),
				project("Ember", "Type experiments", "assets/projects/ember.png"),
			],
			story: vec![
				StoryCard {
					title: "Where it started".into(),
					body: "Tinkering with pixels.".into(),
				},
				StoryCard {
					title: "What I do".into(),
					body: "Front-end engineering and motion design.".into(),
				},
			],
			timeline: vec![
				TimelineEntry {
					period: "2019".into(),
					title: "First job".into(),
					body: "Agency work.".into(),
				},
				TimelineEntry {
					period: "2022".into(),
					title: "Independent".into(),
					body: "Freelance studio.".into(),
				},
			],
			contact: Contact {
				email: "hello@example.com".into(),
				phone: "+1 555 0100".into(),
			},
		}
	}
}

impl Default for Contact {
	fn default() -> Self {
		PortfolioData::default().contact
	}
}

impl PortfolioData {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}
