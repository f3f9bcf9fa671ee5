//! `assessment.html`: the self-assessment worksheet.
//!
//! Practices are grouped by the level ranks actually present in the index,
//! in first-appearance order. Per-practice answers (status, AI use,
//! priority, notes) live only in the page's client state and can be
//! exported as plain text.

use maturity_core::derive::{FlatPracticeIndex, LevelGroup};
use serde::Serialize;

use super::layout::{self, Shell};
use super::{Page, PageRenderer, parse_input};
use crate::error::RenderError;
use crate::escape::{embed_json, escape_html};
use crate::icons;

/// Card colors for progress cards and level tables, cycled by rank.
pub const LEVEL_PALETTE: [&str; 3] = [
    "bg-amber-50 border-amber-200",
    "bg-blue-50 border-blue-200",
    "bg-purple-50 border-purple-200",
];

const SCRIPT: &str = r#"        const practices = data.practices;
        const ranks = [];
        practices.forEach(function (p) {
            if (ranks.indexOf(p.level) === -1) {
                ranks.push(p.level);
            }
        });

        const state = { assessment: {} };

        function blankAnswer() {
            return { status: 'not-started', aiEnabled: false, priority: false, notes: '' };
        }

        function resetState() {
            practices.forEach(function (p) {
                state.assessment[p.id] = blankAnswer();
            });
        }

        function setStatusIcon(id, status) {
            document.querySelectorAll('[data-status-icon]').forEach(function (el) {
                if (el.getAttribute('data-status-icon') === id) {
                    el.innerHTML = data.statusIcons[status] || data.statusIcons['not-started'];
                }
            });
        }

        function updateProgress() {
            ranks.forEach(function (rank) {
                const group = practices.filter(function (p) { return p.level === rank; });
                const established = group.filter(function (p) { return state.assessment[p.id].status === 'established'; }).length;
                const inProgress = group.filter(function (p) { return state.assessment[p.id].status === 'in-progress'; }).length;
                const total = group.length;
                const percentage = total === 0 ? 0 : Math.round((established / total) * 100);

                document.getElementById('level' + rank + '-progress').textContent = percentage + '%';
                const detail = document.getElementById('level' + rank + '-detail');
                detail.textContent = established + ' of ' + total + ' established';
                if (inProgress > 0) {
                    const extra = document.createElement('span');
                    extra.className = 'block';
                    extra.textContent = '(' + inProgress + ' in progress)';
                    detail.appendChild(extra);
                }
            });
        }

        function updatePrioritySummary() {
            const priorities = practices.filter(function (p) { return state.assessment[p.id].priority; });
            const summary = document.getElementById('priority-summary');
            if (priorities.length > 0) {
                summary.style.display = 'block';
                document.getElementById('priority-count').textContent = priorities.length;
                document.getElementById('priority-list').textContent = priorities.map(function (p) { return p.name; }).join(', ');
            } else {
                summary.style.display = 'none';
            }
        }

        function exportAssessment() {
            const teamName = document.getElementById('teamName').value || 'Not specified';
            const date = document.getElementById('assessmentDate').value;
            let text = 'Product Management Maturity Assessment\n';
            text += 'Team: ' + teamName + '\n';
            text += 'Date: ' + date + '\n\n';
            text += '='.repeat(60) + '\n\n';

            practices.forEach(function (p) {
                const answer = state.assessment[p.id];
                if (answer.status !== 'not-started' || answer.notes) {
                    text += p.name + ' (' + p.levelName + ')\n';
                    text += 'Status: ' + answer.status.replace('-', ' ').toUpperCase() + '\n';
                    text += 'AI Enabled: ' + (answer.aiEnabled ? 'Yes' : 'No') + '\n';
                    text += 'Priority: ' + (answer.priority ? 'Yes' : 'No') + '\n';
                    if (answer.notes) {
                        text += 'Notes: ' + answer.notes + '\n';
                    }
                    text += '\n';
                }
            });

            const blob = new Blob([text], { type: 'text/plain' });
            const url = URL.createObjectURL(blob);
            const link = document.createElement('a');
            link.href = url;
            link.download = 'pm-maturity-assessment-' + date + '.txt';
            link.click();
            URL.revokeObjectURL(url);
        }

        function resetAssessment() {
            if (!confirm('Are you sure you want to reset all assessments?')) {
                return;
            }
            resetState();
            document.querySelectorAll('#assessment-container [data-field]').forEach(function (el) {
                if (el.type === 'checkbox') {
                    el.checked = false;
                } else if (el.tagName === 'SELECT') {
                    el.value = 'not-started';
                } else {
                    el.value = '';
                }
            });
            practices.forEach(function (p) { setStatusIcon(p.id, 'not-started'); });
            document.getElementById('teamName').value = '';
            document.getElementById('assessmentDate').valueAsDate = new Date();
            updateProgress();
            updatePrioritySummary();
        }

        document.getElementById('assessment-container').addEventListener('change', function (event) {
            const el = event.target;
            const id = el.getAttribute('data-practice');
            const field = el.getAttribute('data-field');
            if (!id || !field || !state.assessment[id]) {
                return;
            }
            state.assessment[id][field] = el.type === 'checkbox' ? el.checked : el.value;
            if (field === 'status') {
                setStatusIcon(id, el.value);
            }
            updateProgress();
            updatePrioritySummary();
        });
        document.getElementById('export-assessment').addEventListener('click', exportAssessment);
        document.getElementById('reset-assessment').addEventListener('click', resetAssessment);

        resetState();
        document.getElementById('assessmentDate').valueAsDate = new Date();
        updateProgress();"#;

const HOW_TO: &str = r#"            <div class="mt-8 bg-gray-50 p-6 rounded-lg border border-gray-200">
                <h3 class="text-lg font-semibold text-gray-900 mb-3">How to Use This Assessment</h3>
                <div class="space-y-2 text-sm text-gray-700">
                    <p><strong>Status:</strong></p>
                    <ul class="list-disc ml-6 space-y-1">
                        <li><strong>Not Started:</strong> This practice doesn't exist or is rarely done</li>
                        <li><strong>In Progress:</strong> You're working on establishing this practice, it's inconsistent</li>
                        <li><strong>Established:</strong> This practice is consistent, reliable, and embedded in how you work</li>
                    </ul>
                    <p class="mt-3"><strong>AI Enabled:</strong> Check if you're using AI tools to accelerate this practice</p>
                    <p><strong>Priority:</strong> Mark practices you want to focus on improving in the next quarter</p>
                    <p class="mt-3"><strong>Tip:</strong> Be honest! This is for your team's benefit. Aspirational assessment won't help you improve.</p>
                </div>
            </div>"#;

/// Data embedded in the page for the client script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentData<'a> {
    practices: &'a [maturity_core::derive::FlatPractice],
    status_icons: StatusIcons,
}

#[derive(Serialize)]
struct StatusIcons {
    #[serde(rename = "not-started")]
    not_started: &'static str,
    #[serde(rename = "in-progress")]
    in_progress: &'static str,
    established: &'static str,
}

impl StatusIcons {
    fn new() -> Self {
        Self {
            not_started: icons::status_icon("not-started"),
            in_progress: icons::status_icon("in-progress"),
            established: icons::status_icon("established"),
        }
    }
}

/// Renders `assessment.html` from `assessment.json`.
pub struct AssessmentPageRenderer;

impl PageRenderer for AssessmentPageRenderer {
    fn render_json(&self, json: &str) -> Result<String, RenderError> {
        let index: FlatPracticeIndex = parse_input(Page::Assessment, json)?;
        render_assessment_page(&index)
    }

    fn page(&self) -> Page {
        Page::Assessment
    }
}

/// Card color classes for a level rank.
#[must_use]
pub fn level_palette(rank: u32) -> &'static str {
    let slot = usize::try_from(rank.saturating_sub(1)).unwrap_or(0) % LEVEL_PALETTE.len();
    LEVEL_PALETTE[slot]
}

/// Render the assessment page.
///
/// # Errors
///
/// Returns `RenderError::Embed` if the index cannot be serialized.
pub fn render_assessment_page(index: &FlatPracticeIndex) -> Result<String, RenderError> {
    let data = embed_json(&AssessmentData {
        practices: &index.practices,
        status_icons: StatusIcons::new(),
    })
    .map_err(|source| RenderError::Embed {
        page: Page::Assessment.name(),
        source,
    })?;

    let groups = index.level_groups();

    let mut body = Vec::new();
    body.push("    <div class=\"min-h-screen\">".to_string());
    body.push(layout::site_header(
        "Product Management Maturity Self-Assessment",
        None,
    ));
    body.push("        <main class=\"max-w-6xl mx-auto p-6 bg-white\">".to_string());
    body.push("            <div class=\"mb-6\">".to_string());
    body.push(team_fields());
    body.push(progress_cards(&groups));
    body.push(priority_summary());
    body.push("            </div>".to_string());
    body.push("            <div class=\"space-y-6\" id=\"assessment-container\">".to_string());
    for group in &groups {
        body.push(level_table(group));
    }
    body.push("            </div>".to_string());
    body.push(HOW_TO.to_string());
    body.push("        </main>".to_string());
    body.push(layout::site_footer());
    body.push("    </div>".to_string());

    let shell = Shell {
        title: "PM Maturity Model - Self-Assessment",
        body_class: "bg-gray-50",
        style: None,
    };
    Ok(layout::document(&shell, &body.join("\n"), &data, SCRIPT))
}

fn team_fields() -> String {
    format!(
        r#"                <div class="grid grid-cols-2 gap-4 mb-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="teamName">Team Name</label>
                        <input type="text" id="teamName" class="w-full px-3 py-2 border border-gray-300 rounded-md" placeholder="Enter your team name">
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="assessmentDate">Assessment Date</label>
                        <input type="date" id="assessmentDate" class="w-full px-3 py-2 border border-gray-300 rounded-md">
                    </div>
                </div>
                <div class="flex gap-3 mb-6">
                    <button type="button" id="export-assessment" class="flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        {download} Export Assessment
                    </button>
                    <button type="button" id="reset-assessment" class="flex items-center gap-2 px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300">
                        {reset} Reset All
                    </button>
                </div>"#,
        download = icons::DOWNLOAD,
        reset = icons::ROTATE_CCW,
    )
}

fn priority_summary() -> String {
    format!(
        r#"                <div id="priority-summary" class="bg-orange-50 border-2 border-orange-200 rounded-lg p-4 mb-6" style="display: none;">
                    <div class="flex items-center gap-2 mb-2">
                        {}
                        <h3 class="font-semibold text-gray-900">Priority Practices (<span id="priority-count">0</span>)</h3>
                    </div>
                    <div id="priority-list" class="text-sm text-gray-700"></div>
                </div>"#,
        icons::ALERT_CIRCLE
    )
}

fn progress_cards(groups: &[LevelGroup<'_>]) -> String {
    let columns = groups.len().clamp(1, 4);
    let cards: Vec<String> = groups
        .iter()
        .map(|group| {
            format!(
                r#"                    <div class="p-4 rounded-lg border-2 {palette}">
                        <h3 class="font-semibold text-gray-900 mb-2">Level {rank} Progress</h3>
                        <div id="level{rank}-progress" class="text-3xl font-bold text-gray-900 mb-1">0%</div>
                        <div id="level{rank}-detail" class="text-sm text-gray-600">0 of {total} established</div>
                    </div>"#,
                palette = level_palette(group.level),
                rank = group.level,
                total = group.practices.len(),
            )
        })
        .collect();

    format!(
        "                <div class=\"grid grid-cols-{columns} gap-4 mb-6\">\n{}\n                </div>",
        cards.join("\n")
    )
}

fn level_table(group: &LevelGroup<'_>) -> String {
    let rows: Vec<String> = group
        .practices
        .iter()
        .map(|practice| {
            let id = escape_html(&practice.id);
            format!(
                r#"                                    <tr class="border-b border-gray-200">
                                        <td class="p-3">
                                            <div class="flex items-center gap-2">
                                                <span data-status-icon="{id}">{icon}</span>
                                                <span class="font-medium text-gray-900">{name}</span>
                                            </div>
                                        </td>
                                        <td class="p-3">
                                            <select data-practice="{id}" data-field="status" class="w-full px-2 py-1 border border-gray-300 rounded text-sm">
                                                <option value="not-started">Not Started</option>
                                                <option value="in-progress">In Progress</option>
                                                <option value="established">Established</option>
                                            </select>
                                        </td>
                                        <td class="p-3 text-center">
                                            <input type="checkbox" data-practice="{id}" data-field="aiEnabled" class="w-5 h-5 rounded">
                                        </td>
                                        <td class="p-3 text-center">
                                            <input type="checkbox" data-practice="{id}" data-field="priority" class="w-5 h-5 rounded">
                                        </td>
                                        <td class="p-3">
                                            <input type="text" data-practice="{id}" data-field="notes" class="w-full px-2 py-1 border border-gray-300 rounded text-sm" placeholder="Add notes...">
                                        </td>
                                    </tr>"#,
                icon = icons::STATUS_NOT_STARTED,
                name = escape_html(&practice.name),
            )
        })
        .collect();

    format!(
        r#"                <div class="border-2 rounded-lg {palette}">
                    <div class="p-4 border-b-2 border-gray-200">
                        <h2 class="text-xl font-bold text-gray-900">Level {rank}: {label}</h2>
                    </div>
                    <div class="p-4">
                        <div class="overflow-x-auto">
                            <table class="w-full bg-white">
                                <thead>
                                    <tr class="border-b-2 border-gray-200">
                                        <th class="text-left p-3 font-semibold text-gray-700">Practice</th>
                                        <th class="text-center p-3 font-semibold text-gray-700 w-32">Status</th>
                                        <th class="text-center p-3 font-semibold text-gray-700 w-24">AI</th>
                                        <th class="text-center p-3 font-semibold text-gray-700 w-24">Priority</th>
                                        <th class="text-left p-3 font-semibold text-gray-700 w-64">Notes</th>
                                    </tr>
                                </thead>
                                <tbody>
{rows}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>"#,
        palette = level_palette(group.level),
        rank = group.level,
        label = escape_html(group.level_name),
        rows = rows.join("\n"),
    )
}
