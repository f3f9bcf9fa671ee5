//! `model.html`: levels with their practices, criteria and AI examples.
//!
//! The first level starts expanded; every practice starts collapsed.

use maturity_core::model::{Level, MaturityModel, Practice};

use super::layout::{self, Shell};
use super::{Page, PageRenderer, parse_input};
use crate::error::RenderError;
use crate::escape::{embed_json, escape_html};
use crate::icons;

const STYLE: &str = r"        .level-content { display: none; }
        .level-content.active { display: block; }
        .practice-content { display: none; }
        .practice-content.active { display: block; }";

const SCRIPT: &str = r"        const state = {
            expandedLevels: Object.fromEntries(data.levels.map(function (level, i) { return [level.id, i === 0]; })),
            expandedPractices: {}
        };

        function apply(kind, id, open) {
            document.querySelectorAll('[data-' + kind + '-content]').forEach(function (el) {
                if (el.getAttribute('data-' + kind + '-content') === id) {
                    el.classList.toggle('active', open);
                }
            });
            document.querySelectorAll('[data-' + kind + '-arrow]').forEach(function (el) {
                if (el.getAttribute('data-' + kind + '-arrow') === id) {
                    el.textContent = open ? '▼' : '▶';
                }
            });
        }

        document.getElementById('levels-container').addEventListener('click', function (event) {
            const practice = event.target.closest('[data-practice]');
            if (practice) {
                const id = practice.getAttribute('data-practice');
                state.expandedPractices[id] = !state.expandedPractices[id];
                apply('practice', id, state.expandedPractices[id]);
                return;
            }
            const level = event.target.closest('[data-level]');
            if (level) {
                const id = level.getAttribute('data-level');
                state.expandedLevels[id] = !state.expandedLevels[id];
                apply('level', id, state.expandedLevels[id]);
            }
        });";

const ABOUT: &str = r#"            <div class="mt-8 bg-gray-50 p-6 rounded-lg border border-gray-200">
                <h3 class="text-xl font-semibold text-gray-900 mb-4">About This Model</h3>
                <div class="space-y-3 text-sm text-gray-700">
                    <p>
                        This model synthesizes practices from leading product thinkers, tailored for
                        B2B/B2E enterprise software product teams.
                    </p>
                    <p>
                        <strong>Designed for:</strong> Self-assessment and improvement planning by cross-functional
                        product teams including PMs, Product Owners, UX, and Engineering Leadership.
                    </p>
                    <p>
                        <strong>Assessment approach:</strong> Teams should honestly evaluate whether they consistently
                        meet all criteria for a practice. Occasional execution doesn't count: practices should be
                        established, reliable, and habitual.
                    </p>
                    <p>
                        <strong>AI dimension:</strong> AI acceleration is marked where LLMs and AI tools can realistically
                        make practices faster, cheaper, or higher quality.
                    </p>
                </div>
            </div>"#;

/// Renders `model.html` from `model.json`.
pub struct ModelPageRenderer;

impl PageRenderer for ModelPageRenderer {
    fn render_json(&self, json: &str) -> Result<String, RenderError> {
        let model: MaturityModel = parse_input(Page::Model, json)?;
        render_model_page(&model)
    }

    fn page(&self) -> Page {
        Page::Model
    }
}

/// Render the model page.
///
/// # Errors
///
/// Returns `RenderError::Embed` if the model cannot be serialized.
pub fn render_model_page(model: &MaturityModel) -> Result<String, RenderError> {
    let data = embed_json(model).map_err(|source| RenderError::Embed {
        page: Page::Model.name(),
        source,
    })?;

    let mut body = Vec::new();
    body.push("    <div class=\"min-h-screen\">".to_string());
    body.push(layout::site_header(
        layout::SITE_NAME,
        Some("A practice-based framework for B2B/Enterprise product teams to assess and improve their capabilities"),
    ));
    body.push("        <main class=\"max-w-6xl mx-auto p-6 bg-white\">".to_string());
    body.push("            <div class=\"mb-8\">".to_string());
    body.push(format!(
        "                {}",
        layout::callout(
            "How to use this model:",
            "This is designed for team self-assessment. Practices build cumulatively: each level assumes the \
             previous levels are in place. Teams may have mixed maturity across practices. AI acceleration is \
             marked with ✨ where applicable.",
        )
    ));
    body.push("            </div>".to_string());
    body.push("            <div class=\"space-y-6\" id=\"levels-container\">".to_string());
    for (index, level) in model.levels.iter().enumerate() {
        body.push(level_card(level, index == 0));
    }
    body.push("            </div>".to_string());
    body.push(ABOUT.to_string());
    body.push("        </main>".to_string());
    body.push(layout::site_footer());
    body.push("    </div>".to_string());

    let shell = Shell {
        title: "PM Maturity Model - The Model",
        body_class: "bg-gray-50",
        style: Some(STYLE),
    };
    Ok(layout::document(&shell, &body.join("\n"), &data, SCRIPT))
}

fn level_card(level: &Level, expanded: bool) -> String {
    let id = escape_html(&level.id);
    let practices: Vec<String> = level.practices.iter().map(practice_card).collect();

    format!(
        r#"                <div class="{card}">
                    <div class="{header}" data-level="{id}">
                        <h2 class="text-2xl font-bold text-gray-900">{name}</h2>
                        <span class="text-2xl" data-level-arrow="{id}">{arrow}</span>
                    </div>
                    <div class="level-content{active} p-6 space-y-6" data-level-content="{id}">
                        <div>
                            <h3 class="font-semibold text-gray-900 mb-2">{description}</h3>
                            <p class="text-gray-700 mb-3">{context}</p>
                            <p class="text-gray-700 italic bg-white bg-opacity-60 p-3 rounded">{value}</p>
                        </div>
                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold text-gray-900">Practices</h3>
{practices}
                        </div>
                    </div>
                </div>"#,
        card = layout::classes("border-2 rounded-lg", level.color.as_deref()),
        header = layout::classes(
            "p-4 rounded-t-lg cursor-pointer flex items-center justify-between",
            level.header_color.as_deref()
        ),
        name = escape_html(&level.name),
        arrow = if expanded { "▼" } else { "▶" },
        active = if expanded { " active" } else { "" },
        description = escape_html(&level.description),
        context = escape_html(&level.context),
        value = escape_html(&level.value),
        practices = practices.join("\n"),
    )
}

fn practice_card(practice: &Practice) -> String {
    let id = escape_html(&practice.id);
    let criteria: Vec<String> = practice
        .criteria
        .iter()
        .map(|criterion| {
            format!(
                r#"                                        <li class="flex items-start gap-2 text-sm text-gray-700">{}<span>{}</span></li>"#,
                icons::CHECK_CIRCLE,
                escape_html(criterion)
            )
        })
        .collect();

    format!(
        r#"                            <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                                <div class="p-4 cursor-pointer flex items-center justify-between hover:bg-gray-50" data-practice="{id}">
                                    <div class="flex items-center gap-3">
                                        {circle}
                                        <h4 class="font-semibold text-gray-900">{name}</h4>{sparkles}
                                    </div>
                                    <span class="text-xl" data-practice-arrow="{id}">▶</span>
                                </div>
                                <div class="practice-content p-4 pt-0 space-y-4" data-practice-content="{id}">
                                    <div>
                                        <p class="text-sm font-semibold text-gray-700 mb-2">Pass Criteria:</p>
                                        <ul class="space-y-2">
{criteria}
                                        </ul>
                                    </div>{ai}
                                </div>
                            </div>"#,
        circle = icons::CIRCLE,
        name = escape_html(&practice.name),
        sparkles = if practice.ai_enabled() {
            format!("\n                                        {}", icons::SPARKLES)
        } else {
            String::new()
        },
        criteria = criteria.join("\n"),
        ai = ai_examples(practice),
    )
}

/// The AI examples box, shown only for enabled practices with examples.
fn ai_examples(practice: &Practice) -> String {
    let Some(ai) = practice.ai.as_ref().filter(|ai| ai.enabled && !ai.examples.is_empty()) else {
        return String::new();
    };
    let examples: Vec<String> = ai
        .examples
        .iter()
        .map(|example| {
            format!(
                r#"                                            <li class="text-sm text-purple-900 ml-6">• {}</li>"#,
                escape_html(example)
            )
        })
        .collect();

    format!(
        r#"
                                    <div class="bg-purple-50 p-3 rounded border border-purple-200">
                                        <div class="flex items-center gap-2 mb-2">
                                            <span class="text-purple-600">✨</span>
                                            <p class="text-sm font-semibold text-purple-900">AI Acceleration Opportunities:</p>
                                        </div>
                                        <ul class="space-y-1">
{}
                                        </ul>
                                    </div>"#,
        examples.join("\n")
    )
}
