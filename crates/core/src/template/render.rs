use super::sets::TemplateFile;
use crate::vfs::StagedFile;
use std::collections::BTreeMap;
use std::path::Path;

/// Substitution values available to templates.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    values: BTreeMap<&'static str, String>,
}

impl TemplateContext {
    pub fn new(name: &str, class_name: &str, selector: &str, file_name: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert("name", name.to_string());
        values.insert("className", class_name.to_string());
        values.insert("selector", selector.to_string());
        values.insert("fileName", file_name.to_string());
        Self { values }
    }

    fn substitute(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (token, value) in &self.values {
            out = out.replace(&format!("{{{{{token}}}}}"), value);
        }
        out
    }
}

/// Render a template set into a staged file set rooted at `target_dir`.
///
/// Templates whose relative path ends with one of the `skip` suffixes are
/// filtered out (e.g. `.spec.ts` when the caller opted out of tests).
pub fn render_set(
    set: &[TemplateFile],
    ctx: &TemplateContext,
    target_dir: &Path,
    skip: &[&str],
) -> Vec<StagedFile> {
    set.iter()
        .filter(|template| !skip.iter().any(|suffix| template.rel_path.ends_with(suffix)))
        .map(|template| StagedFile {
            path: target_dir.join(ctx.substitute(template.rel_path)),
            content: ctx.substitute(template.body),
        })
        .collect()
}
