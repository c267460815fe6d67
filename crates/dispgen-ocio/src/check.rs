//! Reference checks on an assembled config.
//!
//! Detects roles, views and active entries that point at undefined
//! color spaces, view transforms, displays or views.
//!
//! ```
//! use dispgen_ocio::{builtin, check};
//!
//! let issues = check::check(&builtin::aces_config());
//! assert!(!check::has_errors(&issues));
//! ```

use crate::config::Config;
use std::fmt;

/// Severity level for document issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Config works but may surprise a user.
    Warning,
    /// Config references something that does not exist.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A problem found in a config.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Related element (role, display:view, ...).
    pub context: Option<String>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Checks a config and returns all issues found.
pub fn check(config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_roles(config, &mut issues);
    check_displays(config, &mut issues);
    check_active(config, &mut issues);
    issues
}

/// Returns true if there are any errors.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

fn error(message: String, context: impl Into<String>) -> Issue {
    Issue {
        severity: Severity::Error,
        message,
        context: Some(context.into()),
    }
}

fn check_roles(config: &Config, issues: &mut Vec<Issue>) {
    for (role, cs) in config.roles() {
        if config.colorspace(cs).is_none() {
            issues.push(error(
                format!("role '{role}' references non-existent color space '{cs}'"),
                role,
            ));
        }
    }
}

fn check_displays(config: &Config, issues: &mut Vec<Issue>) {
    if config.displays().is_empty() {
        issues.push(Issue {
            severity: Severity::Warning,
            message: "no displays defined".to_string(),
            context: None,
        });
        return;
    }

    for display in config.displays() {
        if display.views().is_empty() {
            issues.push(Issue {
                severity: Severity::Warning,
                message: format!("display '{}' has no views", display.name()),
                context: Some(display.name().to_string()),
            });
        }

        for view in display.views() {
            let ctx = format!("{}:{}", display.name(), view.name());
            let targets = [view.colorspace(), view.display_colorspace()];
            if targets.iter().all(Option::is_none) {
                issues.push(error(
                    format!("view '{}' has no target color space", view.name()),
                    ctx.clone(),
                ));
            }
            for cs in targets.into_iter().flatten() {
                if config.colorspace(cs).is_none() {
                    issues.push(error(
                        format!(
                            "view '{}' in display '{}' references non-existent color space '{cs}'",
                            view.name(),
                            display.name()
                        ),
                        ctx.clone(),
                    ));
                }
            }
            if let Some(vt) = view.view_transform() {
                if config.view_transform(vt).is_none() {
                    issues.push(error(
                        format!("view '{}' references non-existent view transform '{vt}'", view.name()),
                        ctx.clone(),
                    ));
                }
            }
        }
    }
}

fn check_active(config: &Config, issues: &mut Vec<Issue>) {
    for name in config.active_displays() {
        if config.display(name).is_none() {
            issues.push(error(
                format!("active display '{name}' is not defined"),
                name.as_str(),
            ));
        }
    }
    for name in config.active_views() {
        let defined = config
            .displays()
            .iter()
            .any(|d| d.views().iter().any(|v| v.name() == name));
        if !defined {
            issues.push(Issue {
                severity: Severity::Warning,
                message: format!("active view '{name}' is not used by any display"),
                context: Some(name.clone()),
            });
        }
    }
}
