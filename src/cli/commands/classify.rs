use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::classifier::classify_structure;
use crate::cli::args::OutputFormat;
use crate::cli::setup::{build_resolver, project_ref};
use crate::core::{MethodVerdict, Structure};

pub struct ClassifyConfig {
    pub structure: PathBuf,
    pub project: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub format: OutputFormat,
}

pub fn handle_classify_command(config: ClassifyConfig) -> Result<()> {
    let contents = fs::read_to_string(&config.structure)
        .with_context(|| format!("Failed to read {}", config.structure.display()))?;
    let structure: Structure = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid structure description in {}", config.structure.display()))?;

    let resolver = build_resolver(config.settings.as_deref());
    let project = project_ref(config.project.as_deref());
    let effective = resolver.effective(project.as_ref());

    let verdicts = classify_structure(&structure, &effective);
    log::info!(
        "Classified {} methods of {}",
        verdicts.len(),
        structure.name
    );

    let output = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&verdicts)?,
        OutputFormat::Text => render_text(&verdicts),
    };
    println!("{output}");
    Ok(())
}

/// One line per method: name, role, and the member it refers to
pub fn render_text(verdicts: &[MethodVerdict]) -> String {
    let width = verdicts.iter().map(|v| v.method.chars().count()).max().unwrap_or(0);
    verdicts
        .iter()
        .map(|v| {
            let mut line = format!("{:<width$}  {:<8}", v.method, v.verdict.kind.as_str());
            if let Some(fragment) = &v.verdict.fragment {
                let _ = write!(line, "  {fragment}");
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use pretty_assertions::assert_eq;

    fn verdict(method: &str, verdict: Verdict) -> MethodVerdict {
        MethodVerdict {
            method: method.to_string(),
            verdict,
        }
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let rendered = render_text(&[
            verdict("getId", Verdict::accessor("id")),
            verdict("setEmail", Verdict::mutator("email")),
        ]);
        assert_eq!(
            rendered,
            "getId     accessor  id\nsetEmail  mutator   email"
        );
    }

    #[test]
    fn test_render_text_none_has_no_fragment_column() {
        let rendered = render_text(&[verdict("save", Verdict::none())]);
        assert_eq!(rendered, "save  none");
    }

    #[test]
    fn test_render_text_pads_non_ascii_names_by_char() {
        let rendered = render_text(&[
            verdict("getÜber", Verdict::accessor("über")),
            verdict("getName", Verdict::accessor("name")),
        ]);
        assert_eq!(
            rendered,
            "getÜber  accessor  über\ngetName  accessor  name"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }
}
