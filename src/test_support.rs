use crate::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const AKARI_URL: &str = "https://puzz.link/p?akari/6/6/h.i.h";
pub(crate) const NURIKABE_URL: &str = "https://puzz.link/p?nurikabe/5/5/g3i";

/// A throwaway project laid out like the default config expects.
pub(crate) struct ProjectFixture {
    dir: TempDir,
    config: Config,
}

impl ProjectFixture {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        fs::create_dir_all(config.backend_path(dir.path())).unwrap();
        fs::create_dir_all(config.definitions_path(dir.path())).unwrap();
        Self { dir, config }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn backend_path(&self, name: &str) -> PathBuf {
        self.config.backend_path(self.root()).join(name)
    }

    pub(crate) fn definition_path(&self, name: &str) -> PathBuf {
        self.config.definitions_path(self.root()).join(name)
    }

    pub(crate) fn write_backend(&self, name: &str, content: &str) -> &Self {
        fs::write(self.backend_path(name), content).unwrap();
        self
    }

    pub(crate) fn write_definition(&self, name: &str, content: &str) -> &Self {
        fs::write(self.definition_path(name), content).unwrap();
        self
    }

    pub(crate) fn write_registry(&self, identifiers: &[&str]) -> &Self {
        let mut text = String::from("use crate::board::Board;\n\npuzzle_list!(\n");
        for id in identifiers {
            text.push_str(&format!("    ({id}, \"{id}\"),\n"));
        }
        text.push_str(");\n");
        fs::write(self.config.registry_file(self.root()), text).unwrap();
        self
    }

    pub(crate) fn read_backend(&self, name: &str) -> String {
        fs::read_to_string(self.backend_path(name)).unwrap()
    }
}

/// A backend module, optionally already carrying a `test_solve` test.
pub(crate) fn backend_source(with_test: bool) -> String {
    let mut text = String::from(
        "use crate::board::Board;\n\npub fn solve(url: &str) -> Result<Board, &'static str> {\n    build(url)\n}\n",
    );
    if with_test {
        text.push_str("\n#[cfg(test)]\nmod tests {\n    #[test]\n    fn test_solve() {}\n}\n");
    }
    text
}

/// A definition module declaring each of `urls` in its own test.
pub(crate) fn definition_source(urls: &[&str]) -> String {
    let mut text = String::from("pub fn solve_puzzle() {}\n\n#[cfg(test)]\nmod tests {\n");
    for (i, url) in urls.iter().enumerate() {
        text.push_str(&format!(
            "    #[test]\n    fn test_serializer_{i}() {{\n        let url = \"{url}\";\n        check(url);\n    }}\n"
        ));
    }
    text.push_str("}\n");
    text
}
