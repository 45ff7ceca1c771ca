//! Name resolution: default suggestions, validation, extension handling,
//! role conventions, and collision avoidance.
//!
//! Every function here is pure. The application layer supplies the directory
//! snapshot and the configured extension; nothing in this module touches the
//! filesystem.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ─▶ validate_candidate_name ─▶ normalize_extension
//!           ─▶ apply_convention ─▶ resolve_collision(snapshot) ─▶ final name
//! ```

use crate::domain::{
    entities::{DirectorySnapshot, NameSuggestion},
    error::DomainError,
    value_objects::{Extension, NamingConvention, TemplateKind},
};

/// Default name and editable span for a template kind.
pub fn compute_default_suggestion(kind: TemplateKind, extension: &Extension) -> NameSuggestion {
    NameSuggestion::for_kind(kind, extension)
}

/// Characters accepted in a file name: `[A-Za-z0-9._\- ]`.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ' ')
}

/// Syntactic check of a user-typed name. Returns the trimmed value.
///
/// Reserved device names and the like are not checked here.
pub fn validate_candidate_name(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName);
    }

    let mut offending: Vec<char> = Vec::new();
    for c in raw.chars().filter(|c| !is_allowed_char(*c)) {
        if !offending.contains(&c) {
            offending.push(c);
        }
    }
    if !offending.is_empty() {
        let invalid = offending
            .iter()
            .map(|c| format!("'{}'", c.escape_default()))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(DomainError::InvalidCharacters {
            name: raw.to_string(),
            invalid,
        });
    }

    Ok(trimmed.to_string())
}

/// Strict-mode rule for the Knit pair: the extension-less name must end with
/// the role suffix and have something in front of it.
pub fn check_role_suffix(
    name: &str,
    kind: TemplateKind,
    extension: &Extension,
) -> Result<(), DomainError> {
    if !kind.requires_strict_suffix() {
        return Ok(());
    }

    let suffix = kind.role_suffix();
    let (base, _) = split_extension(name, extension);
    match base.strip_suffix(suffix) {
        None => Err(DomainError::MissingRoleSuffix {
            name: base.to_string(),
            suffix,
        }),
        Some(stem) if stem.trim().is_empty() => Err(DomainError::EmptyStem {
            name: base.to_string(),
            suffix,
        }),
        Some(_) => Ok(()),
    }
}

/// Make `candidate` end with exactly one `extension`.
///
/// A name already ending with the extension is returned unchanged. Otherwise
/// whatever follows the last `.` of the basename is dropped and the
/// extension appended. Idempotent.
pub fn normalize_extension(candidate: &str, extension: &Extension) -> String {
    if candidate.ends_with(extension.as_str()) {
        return candidate.to_string();
    }
    format!("{}{extension}", strip_final_extension(candidate))
}

/// Re-attach the kind's role suffix under the fixed convention.
///
/// `Foo.luau` for a client script becomes `Foo.client.luau`; under
/// [`NamingConvention::Free`] the name is returned untouched.
pub fn apply_convention(
    name: &str,
    kind: TemplateKind,
    extension: &Extension,
    convention: NamingConvention,
) -> String {
    let role = kind.role_suffix();
    if convention == NamingConvention::Free || role.is_empty() {
        return name.to_string();
    }

    let (base, ext) = split_extension(name, extension);
    if base.ends_with(role) {
        name.to_string()
    } else {
        format!("{base}{role}{ext}")
    }
}

/// Find a name not present in `snapshot`.
///
/// A free candidate is returned as is. Otherwise a counter starting at 1 is
/// inserted between the stem and the role suffix (`Name1Controller.luau`,
/// `Foo1.client.luau`, `Foo1.luau`) until a free name comes up. Probes are
/// tested against the snapshot only, so at most `snapshot.len() + 1`
/// iterations run.
pub fn resolve_collision(
    snapshot: &DirectorySnapshot,
    candidate: &str,
    kind: TemplateKind,
    extension: &Extension,
) -> String {
    if !snapshot.contains(candidate) {
        return candidate.to_string();
    }

    let (base, ext) = split_extension(candidate, extension);
    let role = kind.role_suffix();
    let stem = base.strip_suffix(role).unwrap_or(base);

    let mut counter: usize = 1;
    loop {
        let probe = format!("{stem}{counter}{role}{ext}");
        if !snapshot.contains(&probe) {
            return probe;
        }
        counter += 1;
    }
}

/// Split a name into `(base, extension)`.
///
/// Prefers the configured extension; falls back to the last dot of the
/// basename, then to an empty extension.
pub fn split_extension<'a>(name: &'a str, extension: &Extension) -> (&'a str, &'a str) {
    let base = name
        .strip_suffix(extension.as_str())
        .unwrap_or_else(|| strip_final_extension(name));
    (base, &name[base.len()..])
}

fn strip_final_extension(name: &str) -> &str {
    let basename_start = name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match name[basename_start..].rfind('.') {
        // a leading dot marks a dotfile, not an extension
        None | Some(0) => name,
        Some(dot) => &name[..basename_start + dot],
    }
}
