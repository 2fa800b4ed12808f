//! Main scaffolder that coordinates naming, host resolution, parsing, edit
//! computation, template rendering, and the final staged commit

use crate::{
    config::ProjectConfig,
    edit::{self, EditRecorder, Insertion},
    error::{Error, Result},
    naming,
    parser::{TsParser, find_declaration},
    resolve,
    template::{TemplateContext, render_set, template_set},
    types::{GenerateRequest, GenerateSummary},
    validation,
    vfs::{StagedFile, VirtualTree},
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The collection property extended on the host declaration.
const IMPORTS_PROPERTY: &str = "imports";
/// Module specifier the host decorator must originate from.
const DECORATOR_ORIGIN: &str = "@angular/core";

/// Everything a generate would change, computed but not yet committed.
#[derive(Debug)]
pub struct Plan {
    pub class_name: String,
    pub selector: String,
    pub host_path: PathBuf,
    pub already_registered: bool,
    recorders: Vec<EditRecorder>,
    files: Vec<StagedFile>,
}

impl Plan {
    /// Paths of the files the plan would create.
    pub fn created_paths(&self) -> Vec<&PathBuf> {
        self.files.iter().map(|f| &f.path).collect()
    }

    /// Paths of the existing files the plan would edit.
    pub fn updated_paths(&self) -> Vec<&std::path::Path> {
        self.recorders.iter().map(EditRecorder::path).collect()
    }
}

pub struct Scaffolder {
    parser: TsParser,
    config: ProjectConfig,
    tree: VirtualTree,
}

impl Scaffolder {
    pub fn new(config: ProjectConfig, tree: VirtualTree) -> Result<Self> {
        Ok(Self {
            parser: TsParser::new()?,
            config,
            tree,
        })
    }

    pub fn tree(&self) -> &VirtualTree {
        &self.tree
    }

    pub fn into_tree(self) -> VirtualTree {
        self.tree
    }

    /// Compute everything a request would change without committing any of it.
    pub fn plan(&mut self, request: &GenerateRequest) -> Result<Plan> {
        let (sub_dir, name) = naming::split_path_name(&request.name);

        let selector =
            naming::build_selector(&name, request.prefix.as_deref(), &self.config.prefix);
        validation::validate_selector(&selector)?;

        let class_name = format!("{}{}", naming::classify(&name), request.kind.class_suffix());
        let file_name = naming::dasherize(&name);
        debug!("scaffolding {class_name} (selector '{selector}')");

        // A rooted tree must actually contain the configured source root.
        if let Some(root) = self.tree.root() {
            if !root.join(&self.config.source_root).is_dir() {
                return Err(Error::Configuration(format!(
                    "source root {} does not exist under {}",
                    self.config.source_root.display(),
                    root.display()
                )));
            }
        }

        let search_dir = if sub_dir.is_empty() {
            self.config.source_root.clone()
        } else {
            self.config.source_root.join(&sub_dir)
        };
        let target_dir = if request.flat {
            search_dir.clone()
        } else {
            search_dir.join(&file_name)
        };

        let host = resolve::find_host_file(
            &self.tree,
            &search_dir,
            &self.config.source_root,
            request.module.as_deref(),
        )?;

        let source = self.tree.read(&host.path)?;
        let parsed = self.parser.parse(&source, &host.path)?;
        let site = find_declaration(
            &parsed,
            &source,
            host.kind.decorator(),
            Some(DECORATOR_ORIGIN),
        )?;

        let mut recorder = EditRecorder::new(host.path.clone());
        let mut already_registered = false;
        match edit::resolve_insertion(&site, &source, &host.path, IMPORTS_PROPERTY, &class_name)? {
            Insertion::At { offset, text } => recorder.insert(offset, text),
            Insertion::AlreadyPresent => {
                warn!(
                    "{class_name} is already registered in {}; skipping edit",
                    host.path.display()
                );
                already_registered = true;
            }
        }

        let ctx = TemplateContext::new(&name, &class_name, &selector, &file_name);
        let skip: &[&str] = if request.skip_tests { &[".spec.ts"] } else { &[] };
        let files = render_set(template_set(request.kind), &ctx, &target_dir, skip);

        let recorders = if recorder.is_empty() {
            Vec::new()
        } else {
            vec![recorder]
        };

        Ok(Plan {
            class_name,
            selector,
            host_path: host.path,
            already_registered,
            recorders,
            files,
        })
    }

    /// Commit a previously computed plan in one transaction.
    pub fn apply(&mut self, plan: Plan) -> Result<GenerateSummary> {
        let summary = edit::commit(&mut self.tree, plan.recorders, plan.files)?;

        info!(
            "generated {} ({}): {} created, {} updated",
            plan.class_name,
            plan.selector,
            summary.created.len(),
            summary.updated.len()
        );

        Ok(GenerateSummary {
            class_name: plan.class_name,
            selector: plan.selector,
            host_path: plan.host_path,
            created: summary.created,
            updated: summary.updated,
            already_registered: plan.already_registered,
        })
    }

    /// Plan and commit in one call. Any failure leaves the tree untouched.
    pub fn generate(&mut self, request: &GenerateRequest) -> Result<GenerateSummary> {
        let plan = self.plan(request)?;
        self.apply(plan)
    }
}
