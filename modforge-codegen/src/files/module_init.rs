use std::path::{Path, PathBuf};

use modforge_core::GeneratedFile;

/// The module's `__init__.py`, exposing the models package
pub struct ModuleInit {
    pub module: String,
}

impl ModuleInit {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

impl GeneratedFile for ModuleInit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.module).join("__init__.py")
    }

    fn render(&self) -> String {
        "from . import models\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let init = ModuleInit::new("crm_followup");
        assert_eq!(init.render(), "from . import models\n");
        assert_eq!(
            init.path(Path::new("out")),
            Path::new("out/crm_followup/__init__.py")
        );
    }
}
