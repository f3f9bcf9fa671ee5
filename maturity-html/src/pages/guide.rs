//! `guide.html`: getting-started guidance for each level.

use maturity_core::derive::{MergedGuideLevel, MergedGuideView};
use maturity_core::model::guide::StartHere;

use super::layout::{self, Shell};
use super::{Page, PageRenderer, parse_input};
use crate::error::RenderError;
use crate::escape::{embed_json, escape_html};
use crate::icons;

const STYLE: &str = r"        .section-content { display: none; }
        .section-content.expanded { display: block; }";

const SCRIPT: &str = r"        const state = {
            expandedSections: Object.fromEntries(data.levels.map(function (level, i) { return [level.id, i === 0]; }))
        };

        function applySection(id) {
            const open = state.expandedSections[id];
            document.querySelectorAll('[data-section-content]').forEach(function (el) {
                if (el.getAttribute('data-section-content') === id) {
                    el.classList.toggle('expanded', open);
                }
            });
            document.querySelectorAll('[data-section]').forEach(function (header) {
                if (header.getAttribute('data-section') !== id) {
                    return;
                }
                header.querySelectorAll('[data-chevron]').forEach(function (el) {
                    el.classList.toggle('hidden', (el.getAttribute('data-chevron') === 'open') !== open);
                });
            });
        }

        document.getElementById('levels-container').addEventListener('click', function (event) {
            const header = event.target.closest('[data-section]');
            if (!header) {
                return;
            }
            const id = header.getAttribute('data-section');
            state.expandedSections[id] = !state.expandedSections[id];
            applySection(id);
        });";

const PRINCIPLES: &str = r#"        <div class="mt-8 bg-gray-50 p-6 rounded-lg border border-gray-200">
            <h3 class="text-xl font-semibold text-gray-900 mb-4">General Principles for Success</h3>
            <div class="space-y-3 text-sm text-gray-700">
                <p><strong>🎯 Focus beats breadth:</strong> Better to establish 2-3 practices really well than do 10 things poorly.</p>
                <p><strong>👥 Involve the team:</strong> Co-create practices with engineering and UX. Imposed processes fail.</p>
                <p><strong>📊 Make progress visible:</strong> Track and celebrate improvements. Teams need to see they're getting better.</p>
                <p><strong>🔄 Iterate on practices:</strong> Your first template/process won't be perfect. Adjust based on what works.</p>
                <p><strong>⏱️ Be patient:</strong> Real maturity takes time. Most teams spend 6-12 months solidifying each level.</p>
                <p><strong>🤝 Get executive sponsorship:</strong> Leadership support makes everything easier. Show them the business value.</p>
                <p><strong>🚀 Start now:</strong> Don't wait for perfect conditions. Start with one practice this week.</p>
            </div>
        </div>"#;

/// Renders `guide.html` from `guide.json`.
pub struct GuidePageRenderer;

impl PageRenderer for GuidePageRenderer {
    fn render_json(&self, json: &str) -> Result<String, RenderError> {
        let view: MergedGuideView = parse_input(Page::Guide, json)?;
        render_guide_page(&view)
    }

    fn page(&self) -> Page {
        Page::Guide
    }
}

/// Render the guide page.
///
/// # Errors
///
/// Returns `RenderError::Embed` if the view cannot be serialized.
pub fn render_guide_page(view: &MergedGuideView) -> Result<String, RenderError> {
    let data = embed_json(view).map_err(|source| RenderError::Embed {
        page: Page::Guide.name(),
        source,
    })?;

    let mut body = Vec::new();
    body.push("    <div class=\"max-w-6xl mx-auto p-6 bg-white\">".to_string());
    body.push("        <div class=\"mb-8\">".to_string());
    body.push(
        "            <h1 class=\"text-4xl font-bold text-gray-900 mb-4\">Getting Started Guide</h1>"
            .to_string(),
    );
    body.push(
        "            <p class=\"text-lg text-gray-600 mb-4\">Practical advice for teams at each maturity level</p>"
            .to_string(),
    );
    body.push(format!(
        "            {}",
        layout::callout(
            "Using this guide:",
            "Find your current level, focus on establishing those practices solidly before moving up. \
             Maturity isn't a race: it's about building sustainable, high-impact practices.",
        )
    ));
    body.push("        </div>".to_string());
    body.push("        <div class=\"space-y-6\" id=\"levels-container\">".to_string());
    for (index, level) in view.levels.iter().enumerate() {
        body.push(level_section(level, index == 0));
    }
    body.push("        </div>".to_string());
    body.push(PRINCIPLES.to_string());
    body.push("    </div>".to_string());

    let shell = Shell {
        title: "Getting Started Guide - PM Maturity Model",
        body_class: "bg-white",
        style: Some(STYLE),
    };
    Ok(layout::document(&shell, &body.join("\n"), &data, SCRIPT))
}

fn level_section(level: &MergedGuideLevel, expanded: bool) -> String {
    let id = escape_html(&level.id);
    let timeline = level.timeline.as_deref().map_or_else(String::new, |timeline| {
        format!(
            r#"
                    <div class="flex items-center gap-2 mt-1">
                        {}
                        <span class="text-sm text-gray-700">{}</span>
                    </div>"#,
            icons::CLOCK,
            escape_html(timeline)
        )
    });
    let (open_hidden, closed_hidden) = if expanded { ("", " class=\"hidden\"") } else { (" class=\"hidden\"", "") };

    format!(
        r#"            <div class="{card}">
                <div class="{header}" data-section="{id}">
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900">{name}</h2>{timeline}
                    </div>
                    <span data-chevron="open"{open_hidden}>{chevron_down}</span>
                    <span data-chevron="closed"{closed_hidden}>{chevron_right}</span>
                </div>
                <div class="section-content{state} p-6 space-y-6" data-section-content="{id}">
{ready}
{start}
{quick}
{pitfalls}
{success}
{next}
                </div>
            </div>"#,
        card = layout::classes("border-2 rounded-lg", level.color.as_deref()),
        header = layout::classes(
            "p-4 rounded-t-lg cursor-pointer flex items-center justify-between",
            level.header_color.as_deref()
        ),
        name = escape_html(&level.name),
        chevron_down = icons::CHEVRON_DOWN,
        chevron_right = icons::CHEVRON_RIGHT,
        state = if expanded { " expanded" } else { "" },
        ready = titled_list(
            icons::TARGET,
            "You're Ready for This Level When:",
            &level.ready_when,
            |item| arrow_item("text-blue-600", item),
        ),
        start = start_here(&level.start_here),
        quick = titled_list(
            icons::LIGHTBULB,
            "Quick Wins to Build Momentum",
            &level.quick_wins,
            |item| tinted_item("bg-yellow-50", Some("<span class=\"text-yellow-600 font-bold\">💡</span>"), item),
        ),
        pitfalls = titled_list(
            icons::ALERT_TRIANGLE,
            "Common Pitfalls to Avoid",
            &level.pitfalls,
            |item| tinted_item("bg-red-50", None, item),
        ),
        success = titled_list(
            icons::CHECK_CIRCLE_GREEN,
            "Success Looks Like",
            &level.success_looks,
            |item| tinted_item("bg-green-50", None, item),
        ),
        next = next_level(&level.next_level),
    )
}

/// A headed list section. `title` is static markup; `render_item` produces
/// each escaped `<li>`.
fn titled_list(
    icon: &str,
    title: &str,
    items: &[String],
    render_item: impl Fn(&str) -> String,
) -> String {
    let items: Vec<String> = items.iter().map(|item| render_item(item.as_str())).collect();
    format!(
        r#"                    <div>
                        <div class="flex items-center gap-2 mb-3">
                            {icon}
                            <h3 class="text-xl font-semibold text-gray-900">{title}</h3>
                        </div>
                        <ul class="space-y-2">
{}
                        </ul>
                    </div>"#,
        items.join("\n")
    )
}

fn arrow_item(color: &str, item: &str) -> String {
    format!(
        r#"                            <li class="flex items-start gap-2 text-gray-700"><span class="{color} font-bold mt-1">→</span><span>{}</span></li>"#,
        escape_html(item)
    )
}

fn tinted_item(background: &str, marker: Option<&str>, item: &str) -> String {
    format!(
        r#"                            <li class="flex items-start gap-2 text-gray-700 {background} p-3 rounded">{}<span>{}</span></li>"#,
        marker.unwrap_or_default(),
        escape_html(item)
    )
}

fn start_here(block: &StartHere) -> String {
    let items: Vec<String> = block
        .items
        .iter()
        .map(|item| {
            let steps: Vec<String> = item
                .steps
                .iter()
                .map(|step| {
                    format!(
                        r#"                                    <li class="text-sm text-gray-700 flex items-start gap-2"><span class="text-blue-600 mt-1">•</span><span>{}</span></li>"#,
                        escape_html(step)
                    )
                })
                .collect();
            format!(
                r#"                            <div class="bg-gray-50 rounded p-4">
                                <h4 class="font-semibold text-gray-900 mb-2">{}</h4>
                                <ul class="space-y-2 ml-4">
{}
                                </ul>
                            </div>"#,
                escape_html(&item.name),
                steps.join("\n")
            )
        })
        .collect();

    format!(
        r#"                    <div class="bg-white rounded-lg p-4 border-2 border-gray-300">
                        <div class="flex items-center gap-2 mb-4">
                            {}
                            <h3 class="text-xl font-semibold text-gray-900">{}</h3>
                        </div>
                        <div class="space-y-4">
{}
                        </div>
                    </div>"#,
        icons::ROCKET,
        escape_html(&block.title),
        items.join("\n")
    )
}

fn next_level(items: &[String]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|item| arrow_item("text-purple-600", item))
        .collect();
    format!(
        r#"                    <div class="bg-gradient-to-r from-purple-50 to-blue-50 rounded-lg p-4 border-2 border-purple-200">
                        <h3 class="text-lg font-semibold text-gray-900 mb-3">When to Move to the Next Level</h3>
                        <ul class="space-y-2">
{}
                        </ul>
                    </div>"#,
        items.join("\n")
    )
}
