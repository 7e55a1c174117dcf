//! Static page content.
//!
//! Everything the landing page shows is data. The built-in copy can be
//! replaced, section by section, by a JSON `<script id="landing-content">`.

use serde::Deserialize;

/// A button that scrolls to a section of the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavTarget {
	pub label: String,
	/// Element id of the section to scroll to.
	pub section: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
	pub badge: String,
	pub title: String,
	pub highlight: String,
	pub subtitle: String,
	pub actions: Vec<NavTarget>,
}

/// Icon, heading and a line of text. Used by mission, goals and steps.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
	#[serde(default)]
	pub icon: String,
	pub title: String,
	pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
	pub value: String,
	pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct About {
	pub lead: String,
	pub paragraphs: Vec<String>,
	pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
	pub icon: String,
	pub title: String,
	pub description: String,
	/// Bullet points shown in the detail modal.
	pub details: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TeamMember {
	pub avatar: String,
	pub name: String,
	pub role: String,
	pub bio: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
	pub name: String,
	pub role: String,
	pub text: String,
	/// 0 to 5 stars.
	pub rating: u8,
}

impl Testimonial {
	pub const MAX_RATING: u8 = 5;

	pub fn stars(&self) -> String {
		"★".repeat(self.rating.min(Self::MAX_RATING) as usize)
	}

	/// First letter of the author's name, for the avatar bubble.
	pub fn initial(&self) -> String {
		self.name
			.chars()
			.next()
			.map(|c| c.to_uppercase().collect())
			.unwrap_or_default()
	}
}

/// All copy on the landing page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandingContent {
	/// Product name shown in the about heading and the footer.
	pub brand: String,
	/// Headline block with its call-to-action buttons.
	pub hero: Hero,
	/// Mission cards.
	pub mission: Vec<Card>,
	/// About text and highlight ticks.
	pub about: About,
	/// Impact numbers beside the about text.
	pub stats: Vec<Stat>,
	/// Goal cards.
	pub goals: Vec<Card>,
	/// Feature cards, each opening a detail modal.
	pub features: Vec<Feature>,
	/// Team member cards.
	pub team: Vec<TeamMember>,
	/// User quotes with star ratings.
	pub testimonials: Vec<Testimonial>,
	/// "How it works" steps, in order.
	pub steps: Vec<Card>,
	/// Footer navigation.
	pub footer_links: Vec<NavTarget>,
}

fn nav(label: &str, section: &str) -> NavTarget {
	NavTarget {
		label: label.into(),
		section: section.into(),
	}
}

fn card(icon: &str, title: &str, text: &str) -> Card {
	Card {
		icon: icon.into(),
		title: title.into(),
		text: text.into(),
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl Default for LandingContent {
	fn default() -> Self {
		Self {
			brand: "Community AI".into(),
			hero: Hero {
				badge: "AI-Powered Innovation".into(),
				title: "Community AI -".into(),
				highlight: "Empowering Communities Through AI".into(),
				subtitle: "Access government schemes, education, and opportunities through \
				           voice-first AI assistance in your language"
					.into(),
				actions: vec![
					nav("Explore Solutions", "features"),
					nav("Learn More", "about"),
				],
			},
			mission: vec![
				card(
					"🎯",
					"Bridge the Digital Divide",
					"Making technology accessible to everyone, especially underserved communities.",
				),
				card(
					"🌟",
					"Simplify Access to Services",
					"Breaking down barriers to government schemes, education, and opportunities.",
				),
				card(
					"💡",
					"Enable Growth",
					"Tools and resources that help individuals and communities thrive.",
				),
			],
			about: About {
				lead: "An inclusive AI platform that brings public services, education, and \
				       opportunities directly to communities."
					.into(),
				paragraphs: strings(&[
					"The platform breaks down language barriers, simplifies complex processes, \
					 and makes critical information accessible to everyone.",
					"Support for multiple Indian languages, voice-first interaction, and \
					 low-bandwidth optimization means no one is left behind.",
				]),
				highlights: strings(&[
					"Multilingual Support",
					"Voice-First Design",
					"AI-Powered Assistance",
					"Free for All",
				]),
			},
			stats: vec![
				Stat {
					value: "10K+".into(),
					label: "Active Users".into(),
				},
				Stat {
					value: "50+".into(),
					label: "Government Schemes".into(),
				},
				Stat {
					value: "100+".into(),
					label: "Learning Resources".into(),
				},
				Stat {
					value: "5+".into(),
					label: "Languages Supported".into(),
				},
			],
			goals: vec![
				card(
					"◎",
					"Accessibility",
					"Make government services accessible to everyone, regardless of location or literacy level",
				),
				card(
					"♥",
					"Empowerment",
					"Empower communities with knowledge and resources to improve their lives",
				),
				card(
					"◍",
					"Inclusion",
					"Bridge the digital divide with multilingual, voice-first technology",
				),
				card(
					"✦",
					"Impact",
					"Create measurable social impact in underserved communities",
				),
			],
			features: vec![
				Feature {
					icon: "💬".into(),
					title: "Civic Assistant".into(),
					description: "Get answers about public services and schemes at any hour.".into(),
					details: strings(&[
						"24/7 Citizen Support",
						"Government Scheme Guidance",
						"Application Assistance",
						"Instant Query Resolution",
					]),
				},
				Feature {
					icon: "📘".into(),
					title: "Education".into(),
					description: "Free courses and learning material for every stage of life.".into(),
					details: strings(&[
						"Free Learning Modules",
						"Skill Development Courses",
						"Expert Webinars",
						"Resource Downloads",
					]),
				},
				Feature {
					icon: "🔍".into(),
					title: "Resource Finder".into(),
					description: "Locate nearby facilities and services in seconds.".into(),
					details: strings(&[
						"Local Facility Search",
						"Service Mapping",
						"Emergency Contacts",
						"Community Directory",
					]),
				},
				Feature {
					icon: "🎙".into(),
					title: "Voice First".into(),
					description: "Talk to the assistant in your own language.".into(),
					details: strings(&[
						"Natural Language Understanding",
						"Vernacular Speech Support",
						"Hands-free Interaction",
						"Accessible to Non-literate Users",
					]),
				},
			],
			team: vec![
				TeamMember {
					avatar: "👨‍💻".into(),
					name: "Ritesh Kumar".into(),
					role: "Project Lead".into(),
					bio: strings(&[
						"AI & ML Enthusiast",
						"React & SQL Developer",
						"Passionate about Full-Stack Innovation",
					]),
				},
				TeamMember {
					avatar: "🧑‍💻".into(),
					name: "Ankit".into(),
					role: "Project Co-Lead".into(),
					bio: strings(&[
						"Full Stack Architect",
						"Modern Web Architect",
						"Community-Driven Tech Solutions",
					]),
				},
			],
			testimonials: vec![
				Testimonial {
					name: "Rajesh Kumar".into(),
					role: "Farmer, Punjab".into(),
					text: "This platform helped me discover the PM-KISAN scheme. The voice feature \
					       in Punjabi made it so easy!"
						.into(),
					rating: 5,
				},
				Testimonial {
					name: "Priya Sharma".into(),
					role: "Student, Mumbai".into(),
					text: "Found amazing scholarship opportunities here. The AI assistant is very helpful!"
						.into(),
					rating: 5,
				},
				Testimonial {
					name: "Mohammed Ali".into(),
					role: "Small Business Owner, Delhi".into(),
					text: "Got information about the MUDRA loan scheme and started my business \
					       with government support!"
						.into(),
					rating: 5,
				},
			],
			steps: vec![
				card(
					"1",
					"Create Account",
					"Sign up with your details and select your preferred language",
				),
				card(
					"2",
					"Choose Your Needs",
					"Tell us what you're looking for - schemes, education, or resources",
				),
				card(
					"3",
					"Get AI Assistance",
					"Interact with the assistant via text or voice in your language",
				),
			],
			footer_links: vec![
				nav("About", "about"),
				nav("The Team", "team"),
				nav("Goals", "goals"),
				nav("Features", "features"),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn built_in_content_fills_every_section() {
		let content = LandingContent::default();
		assert_eq!(content.features.len(), 4);
		assert_eq!(content.goals.len(), 4);
		assert_eq!(content.testimonials.len(), 3);
		assert!(!content.team.is_empty());
		assert!(content.features.iter().all(|f| !f.details.is_empty()));
	}

	#[test]
	fn override_replaces_only_named_sections() {
		let content: LandingContent = serde_json::from_str(
			r#"{ "brand": "Civic Desk", "stats": [{ "value": "1", "label": "Pilot" }] }"#,
		)
		.unwrap();
		assert_eq!(content.brand, "Civic Desk");
		assert_eq!(content.stats.len(), 1);
		assert_eq!(content.features, LandingContent::default().features);
	}

	#[test]
	fn stars_are_capped() {
		let mut t = LandingContent::default().testimonials.remove(0);
		assert_eq!(t.stars().chars().count(), 5);
		t.rating = 9;
		assert_eq!(t.stars().chars().count(), 5);
		t.rating = 0;
		assert!(t.stars().is_empty());
	}

	#[test]
	fn initial_is_first_letter() {
		let mut t = LandingContent::default().testimonials.remove(1);
		assert_eq!(t.initial(), "P");
		t.name = "ädel".into();
		assert_eq!(t.initial(), "Ä");
		t.name.clear();
		assert_eq!(t.initial(), "");
	}
}
