//! Landing page layout.
//!
//! Plain declarative rendering of [`LandingContent`]. The only behaviour is
//! smooth scrolling to sections, the feature detail modal and the
//! scroll-to-top button.

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::content::{Card, Feature, LandingContent, NavTarget};

/// Height of the fixed header that scroll targets must clear.
const HEADER_OFFSET: f64 = 80.0;
/// Scroll distance after which the scroll-to-top button appears.
const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Document y a section should be scrolled to, given its viewport-relative top.
fn section_offset(element_top: f64, scroll_y: f64) -> f64 {
	element_top + scroll_y - HEADER_OFFSET
}

fn smooth_scroll_to(top: f64) {
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window().scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_section(id: &str) {
	let Some(element) = document().get_element_by_id(id) else {
		debug!("landing: no section #{}", id);
		return;
	};
	let top = element.get_bounding_client_rect().top();
	let scroll_y = window().scroll_y().unwrap_or(0.0);
	smooth_scroll_to(section_offset(top, scroll_y));
}

fn nav_button(target: NavTarget, class: &'static str) -> impl IntoView {
	let section = target.section.clone();
	view! {
		<button class=class on:click=move |_| scroll_to_section(&section)>
			{target.label}
		</button>
	}
}

fn card_grid(cards: Vec<Card>, class: &'static str) -> impl IntoView {
	cards
		.into_iter()
		.map(|c| {
			view! {
				<div class=class>
					<div class="card-icon">{c.icon}</div>
					<h3>{c.title}</h3>
					<p>{c.text}</p>
				</div>
			}
		})
		.collect_view()
}

fn section_header(title: &'static str, subtitle: &'static str) -> impl IntoView {
	view! {
		<div class="section-header">
			<h2>{title}</h2>
			<p>{subtitle}</p>
		</div>
	}
}

/// Detail overlay for one feature. Clicking the backdrop closes it.
#[component]
fn FeatureModal(feature: Feature, on_close: Callback<()>) -> impl IntoView {
	view! {
		<div class="feature-modal-overlay" on:click=move |_| on_close.run(())>
			<div class="feature-modal-content" on:click=|ev| ev.stop_propagation()>
				<div class="modal-header">
					<span class="modal-icon">{feature.icon}</span>
					<button class="modal-close-btn" aria-label="Close" on:click=move |_| on_close.run(())>
						"×"
					</button>
				</div>
				<div class="modal-body">
					<h2 class="modal-title">{feature.title}</h2>
					<p class="modal-description">{feature.description}</p>
					<ul class="modal-details">
						{feature
							.details
							.into_iter()
							.map(|d| view! { <li class="modal-detail-item">{d}</li> })
							.collect_view()}
					</ul>
					<button class="btn-modal-action" on:click=move |_| on_close.run(())>
						"Got it"
					</button>
				</div>
			</div>
		</div>
	}
}

/// Round button fixed to the corner once the page has been scrolled a bit.
#[component]
fn ScrollToTop() -> impl IntoView {
	let visible = RwSignal::new(false);
	let handle = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		visible.set(y > SCROLL_TOP_THRESHOLD);
	});
	on_cleanup(move || handle.remove());

	view! {
		<Show when=move || visible.get()>
			<button class="scroll-to-top" aria-label="Scroll to top" on:click=|_| smooth_scroll_to(0.0)>
				"↑"
			</button>
		</Show>
	}
}

/// The full landing page.
#[component]
pub fn Landing(content: LandingContent) -> impl IntoView {
	let LandingContent {
		brand,
		hero,
		mission,
		about,
		stats,
		goals,
		features,
		team,
		testimonials,
		steps,
		footer_links,
	} = content;

	let selected = RwSignal::new(None::<usize>);
	let modal_features = features.clone();
	let close = Callback::new(move |_: ()| selected.set(None));

	view! {
		<div class="landing">
			<section id="home" class="hero">
				<div class="container hero-content">
					<span class="badge badge-primary">"✨ " {hero.badge}</span>
					<h1 class="hero-title">
						<span class="title-white">{hero.title}</span>
						" "
						<span class="title-highlight">{hero.highlight}</span>
					</h1>
					<p class="hero-subtitle">{hero.subtitle}</p>
					<div class="hero-actions">
						{hero
							.actions
							.into_iter()
							.map(|a| nav_button(a, "btn btn-explore"))
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="mission" class="mission-section">
				<div class="container">
					{section_header("Our Mission", "Empowering communities through accessible AI technology")}
					<div class="mission-content">{card_grid(mission, "mission-card")}</div>
				</div>
			</section>

			<section id="about" class="about-section">
				<div class="container about-grid">
					<div class="about-content">
						<h2>"About " {brand.clone()}</h2>
						<p class="about-lead">{about.lead}</p>
						{about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
						<div class="about-features">
							{about
								.highlights
								.into_iter()
								.map(|h| view! { <div class="about-feature">"✓ " {h}</div> })
								.collect_view()}
						</div>
					</div>
					<div class="about-stats-card">
						<h3>"Making Real Impact"</h3>
						{stats
							.into_iter()
							.map(|s| {
								view! {
									<div class="impact-stat">
										<div class="impact-number">{s.value}</div>
										<div class="impact-label">{s.label}</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="goals" class="goals-section">
				<div class="container">
					{section_header("Our Goals", "What we aim to achieve for communities")}
					<div class="goals-grid">{card_grid(goals, "goal-card")}</div>
				</div>
			</section>

			<section id="features" class="features-section">
				<div class="container">
					{section_header("Features", "Comprehensive tools to empower communities")}
					<div class="features-grid">
						{features
							.into_iter()
							.enumerate()
							.map(|(i, f)| {
								view! {
									<div class="feature-card clickable" on:click=move |_| selected.set(Some(i))>
										<div class="feature-icon">{f.icon}</div>
										<h3>{f.title}</h3>
										<p>{f.description}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="team" class="team-section">
				<div class="container">
					{section_header("Our Team", "The people behind the platform")}
					<div class="team-grid">
						{team
							.into_iter()
							.map(|m| {
								view! {
									<div class="team-card">
										<div class="member-avatar">{m.avatar}</div>
										<h3 class="member-name">{m.name}</h3>
										<p class="member-role">{m.role}</p>
										<p class="member-bio">
											{m.bio.into_iter().map(|b| view! { <span>{b}</span> }).collect_view()}
										</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="testimonials" class="testimonials-section">
				<div class="container">
					{section_header("What Users Say", "Real stories from real people")}
					<div class="testimonials-grid">
						{testimonials
							.into_iter()
							.map(|t| {
								let (stars, initial) = (t.stars(), t.initial());
								view! {
									<div class="testimonial-card">
										<div class="testimonial-rating">{stars}</div>
										<p class="testimonial-text">"\u{201c}" {t.text} "\u{201d}"</p>
										<div class="testimonial-author">
											<div class="author-avatar">{initial}</div>
											<div>
												<div class="author-name">{t.name}</div>
												<div class="author-role">{t.role}</div>
											</div>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="how-it-works" class="how-it-works">
				<div class="container">
					{section_header("How It Works", "Get started in three simple steps")}
					<div class="steps-grid">{card_grid(steps, "step-card")}</div>
				</div>
			</section>

			<footer id="contact" class="landing-footer">
				<div class="container footer-grid">
					<div class="footer-brand">{brand}</div>
					<div class="footer-column">
						{footer_links
							.into_iter()
							.map(|l| nav_button(l, "footer-scroll-link"))
							.collect_view()}
					</div>
				</div>
			</footer>

			{move || {
				selected
					.get()
					.and_then(|i| modal_features.get(i).cloned())
					.map(|feature| view! { <FeatureModal feature=feature on_close=close /> })
			}}
			<ScrollToTop />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn section_offset_clears_header() {
		assert_eq!(section_offset(300.0, 1000.0), 1220.0);
		assert_eq!(section_offset(-200.0, 500.0), 220.0);
	}
}
