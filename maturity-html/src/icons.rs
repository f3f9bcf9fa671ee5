//! Inline SVG icon library shared by the page renderers.

/// Expanded indicator for large section headers.
pub const CHEVRON_DOWN: &str = r#"<svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><polyline points="6 9 12 15 18 9" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></polyline></svg>"#;

/// Collapsed indicator for large section headers.
pub const CHEVRON_RIGHT: &str = r#"<svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><polyline points="9 18 15 12 9 6" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></polyline></svg>"#;

/// AI acceleration marker next to a practice name.
pub const SPARKLES: &str =
    r#"<span class="text-purple-500" title="AI Acceleration Available">✨</span>"#;

/// Bullet for a pass criterion.
pub const CHECK_CIRCLE: &str = r#"<svg class="w-4 h-4 mt-0.5 text-green-600 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path></svg>"#;

/// Practice marker on the model page.
pub const CIRCLE: &str = r#"<svg class="w-5 h-5 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" stroke-width="2"></circle></svg>"#;

/// Status icon: established.
pub const STATUS_ESTABLISHED: &str = r#"<svg class="w-5 h-5 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path></svg>"#;

/// Status icon: in progress.
pub const STATUS_IN_PROGRESS: &str = r#"<svg class="w-5 h-5 text-blue-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"></path></svg>"#;

/// Status icon: not started.
pub const STATUS_NOT_STARTED: &str = r#"<svg class="w-5 h-5 text-gray-300" fill="none" stroke="currentColor" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" stroke-width="2"></circle></svg>"#;

/// Export button icon.
pub const DOWNLOAD: &str = r#"<svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4"></path></svg>"#;

/// Reset button icon.
pub const ROTATE_CCW: &str = r#"<svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24"><polyline points="1 4 1 10 7 10" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></polyline><path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path></svg>"#;

/// Priority summary heading.
pub const ALERT_CIRCLE: &str = r#"<svg class="w-5 h-5 text-orange-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></circle><line x1="12" y1="8" x2="12" y2="12" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line><line x1="12" y1="16" x2="12.01" y2="16" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line></svg>"#;

/// "Ready when" heading.
pub const TARGET: &str = r#"<svg class="w-5 h-5 text-gray-700" fill="none" stroke="currentColor" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></circle><circle cx="12" cy="12" r="6" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></circle><circle cx="12" cy="12" r="2" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></circle></svg>"#;

/// "Quick wins" heading.
pub const LIGHTBULB: &str = r#"<svg class="w-5 h-5 text-yellow-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><line x1="9" y1="18" x2="15" y2="18" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line><line x1="10" y1="22" x2="14" y2="22" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line><path d="M15.09 14c.18-.98.65-1.74 1.41-2.5A4.65 4.65 0 0 0 18 8 6 6 0 0 0 6 8c0 1 .23 2.23 1.5 3.5A4.61 4.61 0 0 1 8.91 14" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path></svg>"#;

/// "Pitfalls" heading.
pub const ALERT_TRIANGLE: &str = r#"<svg class="w-5 h-5 text-red-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path><line x1="12" y1="9" x2="12" y2="13" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line><line x1="12" y1="17" x2="12.01" y2="17" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></line></svg>"#;

/// "Success looks like" heading.
pub const CHECK_CIRCLE_GREEN: &str = STATUS_ESTABLISHED;

/// "Start here" heading.
pub const ROCKET: &str = r#"<svg class="w-5 h-5 text-blue-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></path></svg>"#;

/// Level timeline marker.
pub const CLOCK: &str = r#"<svg class="w-4 h-4 text-gray-600" fill="none" stroke="currentColor" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></circle><polyline points="12 6 12 12 16 14" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></polyline></svg>"#;

/// Status icon for an assessment status value.
///
/// Unknown values render as not started.
#[must_use]
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "established" => STATUS_ESTABLISHED,
        "in-progress" => STATUS_IN_PROGRESS,
        _ => STATUS_NOT_STARTED,
    }
}
