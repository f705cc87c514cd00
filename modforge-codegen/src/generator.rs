use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use modforge_core::GeneratedFile;
use modforge_manifest::{
    Blueprint, ManifestValues, ModelDescription, ModuleDescription, ValidationError, validate,
};
use serde::Serialize;

use crate::{
    error::{ErrorKind, GenerateError, GenerateFailure, Step},
    files::{AccessCsv, ManifestPy, ModelPy, ModelsInit, ModuleInit, ViewXml},
    layout::DirectoryLayout,
};

type Artifact<'a> = (Step, Box<dyn GeneratedFile + 'a>);

/// Knobs that change generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Source of the manifest's version, category, summary and depends
    pub manifest: ManifestValues,
}

/// Odoo module generator.
///
/// Holds an immutable snapshot of the description. Rendering is pure;
/// [`try_generate`](Self::try_generate) writes the artifacts in a fixed
/// order: directories, module init, models init, manifest, then model and
/// view per model, then the access table.
#[derive(Debug, Clone)]
pub struct ModuleGenerator {
    module: ModuleDescription,
    models: Vec<ModelDescription>,
    options: GeneratorOptions,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub module: String,
    /// Module root directory
    pub root: PathBuf,
    /// Files written, in write order
    pub written: Vec<PathBuf>,
}

/// Caller-facing summary of a run: success flag plus a display message.
///
/// On failure, `failure` says what kind of error stopped the run and at
/// which step; `written` lists whatever reached the disk before that.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub message: String,
    pub written: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureInfo>,
}

/// Structured part of a failed [`GenerationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureInfo {
    pub kind: ErrorKind,
    pub step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl From<Result<GenerateReport, GenerateFailure>> for GenerationResult {
    fn from(result: Result<GenerateReport, GenerateFailure>) -> Self {
        match result {
            Ok(report) => GenerationResult {
                success: true,
                message: format!("Module {} has been created successfully.", report.module),
                written: report.written,
                failure: None,
            },
            Err(failure) => GenerationResult {
                success: false,
                message: failure.error.detailed_message(),
                failure: Some(FailureInfo {
                    kind: failure.error.kind(),
                    path: failure.error.path().map(Path::to_path_buf),
                    step: failure.step,
                }),
                written: failure.written,
            },
        }
    }
}

impl ModuleGenerator {
    pub fn new(module: ModuleDescription, models: Vec<ModelDescription>) -> Self {
        Self {
            module,
            models,
            options: GeneratorOptions::default(),
        }
    }

    /// Generator for a parsed `modforge.toml`, honoring its `[generate]` table.
    pub fn from_blueprint(blueprint: Blueprint) -> Self {
        Self::new(blueprint.module, blueprint.models).with_options(GeneratorOptions {
            manifest: blueprint.generate.manifest,
        })
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_manifest_values(mut self, values: ManifestValues) -> Self {
        self.options.manifest = values;
        self
    }

    pub fn module(&self) -> &ModuleDescription {
        &self.module
    }

    pub fn models(&self) -> &[ModelDescription] {
        &self.models
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name.clone()).collect()
    }

    /// Every artifact in write order, tagged with its step.
    fn artifacts(&self) -> Vec<Artifact<'_>> {
        let name = self.module.name.as_str();
        let model_names = self.model_names();

        let mut files: Vec<Artifact<'_>> = Vec::with_capacity(4 + 2 * self.models.len());
        files.push((Step::ModuleInit, Box::new(ModuleInit::new(name))));
        files.push((
            Step::ModelsInit,
            Box::new(ModelsInit::new(name, model_names.clone())),
        ));
        files.push((
            Step::Manifest,
            Box::new(ManifestPy::new(
                &self.module,
                &model_names,
                self.options.manifest,
            )),
        ));

        for model in &self.models {
            files.push((
                Step::Model(model.name.clone()),
                Box::new(ModelPy::new(name, model)),
            ));
            files.push((
                Step::View(model.name.clone()),
                Box::new(ViewXml::new(name, model)),
            ));
        }

        files.push((Step::Access, Box::new(AccessCsv::new(name, model_names))));
        files
    }

    /// Render the whole module without touching the disk.
    ///
    /// Keys are paths relative to the output directory, in write order.
    pub fn preview(&self) -> Result<IndexMap<String, String>, ValidationError> {
        validate(&self.module, &self.models)?;

        Ok(self
            .artifacts()
            .into_iter()
            .map(|(_, file)| {
                (
                    file.path(Path::new("")).display().to_string(),
                    file.render(),
                )
            })
            .collect())
    }

    /// Generate the module under `base`.
    ///
    /// Stops at the first failing step. Nothing is rolled back: the
    /// failure lists the files written so far.
    pub fn try_generate(&self, base: &Path) -> Result<GenerateReport, GenerateFailure> {
        let _span = tracing::info_span!("generate", module = %self.module.name).entered();
        let mut written = Vec::new();

        validate(&self.module, &self.models).map_err(|e| GenerateFailure {
            step: Step::Validate,
            error: e.into(),
            written: Vec::new(),
        })?;

        let layout = DirectoryLayout::new(base, &self.module.name);
        layout.create().map_err(|(path, source)| GenerateFailure {
            step: Step::Layout,
            error: GenerateError::Directory { path, source },
            written: Vec::new(),
        })?;

        for (step, file) in self.artifacts() {
            tracing::debug!(%step, "rendering");
            match file.write(base) {
                Ok(path) => {
                    tracing::debug!(path = %path.display(), "written");
                    written.push(path);
                }
                Err(e) => {
                    tracing::warn!(%step, error = %e, "generation stopped");
                    return Err(GenerateFailure {
                        step,
                        error: e.into(),
                        written,
                    });
                }
            }
        }

        tracing::info!(
            models = self.models.len(),
            files = written.len(),
            "module generated"
        );

        Ok(GenerateReport {
            module: self.module.name.clone(),
            root: layout.root().to_path_buf(),
            written,
        })
    }

    /// Generate the module under `base`, folding the outcome into a
    /// [`GenerationResult`].
    pub fn generate(&self, base: &Path) -> GenerationResult {
        self.try_generate(base).into()
    }
}
