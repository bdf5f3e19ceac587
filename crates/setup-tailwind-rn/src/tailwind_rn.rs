//! tailwind-rn setup configuration

use colored::Colorize;
use setup_core::{NextStep, PackageManager, ScaffoldFile, ScriptEntry, SetupConfig};

pub const CONTENT_DOCS_URL: &str = "https://tailwindcss.com/docs/content-configuration";

const INFO: &str = "ℹ";

/// Starter Tailwind config; core plugins that have no React Native equivalent are disabled
pub const TAILWIND_CONFIG: &str = "\
module.exports = {
  content: [], // Content configuration: https://tailwindcss.com/docs/content-configuration
  theme: {
    extend: {},
  },
  plugins: [],
  corePlugins: require('tailwind-rn/unsupported-core-plugins'),
}
";

pub const INPUT_CSS: &str = "@tailwind utilities;\n";
pub const TAILWIND_CSS: &str = "\n";
pub const TAILWIND_JSON: &str = "{}\n";

pub const BUILD_SCRIPT: &str =
    "tailwindcss --input input.css --output tailwind.css --no-autoprefixer && tailwind-rn";
pub const DEV_SCRIPT: &str = "concurrently \"tailwindcss --input input.css --output tailwind.css --no-autoprefixer --watch\" \"tailwind-rn --watch\"";

/// tailwind-rn product configuration
#[derive(Clone)]
pub struct TailwindRnConfig;

impl SetupConfig for TailwindRnConfig {
    fn display_name(&self) -> &'static str {
        "tailwind-rn"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/vadimdemedes/tailwind-rn"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["tailwind-rn"]
    }

    fn dev_dependencies(&self) -> &'static [&'static str] {
        &["tailwindcss", "postcss", "concurrently"]
    }

    fn scaffold_title(&self) -> &'static str {
        "Create Tailwind config"
    }

    fn files(&self) -> Vec<ScaffoldFile> {
        vec![
            ScaffoldFile::new("tailwind.config.js", TAILWIND_CONFIG, "Tailwind configuration"),
            ScaffoldFile::new("input.css", INPUT_CSS, "Entrypoint for Tailwind compiler"),
            ScaffoldFile::new("tailwind.css", TAILWIND_CSS, "Generated CSS by Tailwind compiler"),
            ScaffoldFile::new(
                "tailwind.json",
                TAILWIND_JSON,
                "Generated CSS converted into JSON for `tailwind-rn`",
            ),
        ]
    }

    fn scripts(&self) -> Vec<ScriptEntry> {
        vec![
            ScriptEntry::new("build:tailwind", BUILD_SCRIPT)
                .described("Build CSS file and transform it for use with tailwind-rn"),
            ScriptEntry::new("dev:tailwind", DEV_SCRIPT)
                .described("Watch mode for the command above"),
            ScriptEntry::new("tailwind-rn", "tailwind-rn"),
        ]
    }

    fn next_steps(&self, package_manager: PackageManager) -> Vec<NextStep> {
        let keyword = |s: &str| s.red().to_string();
        let ident = |s: &str| s.green().to_string();
        let string = |s: &str| s.yellow().to_string();

        vec![
            NextStep::new(format!(
                "Change the {} section of your {}.",
                "'content'".bold(),
                "'tailwind.config.js'".bold()
            ))
            .line(format!(
                "More details: {} {}",
                INFO.cyan(),
                CONTENT_DOCS_URL.underline()
            )),
            NextStep::new(format!("Run {} in development mode:", "tailwind-rn".bold())).line(
                format!(
                    " {} {}",
                    "$".dimmed(),
                    package_manager.run_command("dev:tailwind")
                ),
            ),
            NextStep::new(format!(
                "Import {} and {} in the root of your app",
                "TailwindProvider".bold(),
                "tailwind.json".bold()
            ))
            .line(format!(
                " {} {{{}}} {} {};",
                keyword("import"),
                ident("TailwindProvider"),
                keyword("from"),
                string("'tailwind-rn'")
            ))
            .line(format!(
                " {} {} {} {};",
                keyword("import"),
                ident("utilities"),
                keyword("from"),
                string("'./tailwind.json'")
            )),
            NextStep::new(format!(
                "Wrap the root of your app into {}:",
                "TailwindProvider".bold()
            ))
            .line(format!(
                " {} {}={{{}}}{}",
                keyword("<TailwindProvider"),
                ident("utilities"),
                ident("utilities"),
                keyword(">")
            ))
            .line(format!("   {}", keyword("<MyComponent/>")))
            .line(format!(" {}", keyword("</TailwindProvider>"))),
            NextStep::new("Use Tailwind")
                .line(format!(
                    " {} {{{}}} {} {};",
                    keyword("import"),
                    ident("useTailwind"),
                    keyword("from"),
                    string("'tailwind-rn'")
                ))
                .line("")
                .line(format!(
                    " {} {} {} () {} {{",
                    keyword("const"),
                    ident("MyComponent"),
                    keyword("="),
                    keyword("=>")
                ))
                .line(format!(
                    "   {} {} {} {}();",
                    keyword("const"),
                    ident("tailwind"),
                    keyword("="),
                    ident("useTailwind")
                ))
                .line("")
                .line(format!(
                    "   {} {}={{{}({})}}{}Hello world{};",
                    keyword("return <Text"),
                    ident("style"),
                    ident("tailwind"),
                    string("'text-blue-600'"),
                    keyword(">"),
                    keyword("</Text>")
                ))
                .line(" };"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use setup_core::tasks::SilentReporter;
    use setup_core::{render_summary, CommandRunner, SetupContext, SetupError};
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    /// Records every command; optionally fails the nth call with exit code 1
    #[derive(Default)]
    struct FakeRunner {
        calls: RefCell<Vec<String>>,
        fail_on_call: Option<usize>,
    }

    impl CommandRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[String]) -> Result<(), SetupError> {
            let command = format!("{} {}", program, args.join(" "));
            let index = {
                let mut calls = self.calls.borrow_mut();
                calls.push(command.clone());
                calls.len() - 1
            };
            if self.fail_on_call == Some(index) {
                return Err(SetupError::CommandFailed {
                    command,
                    code: Some(1),
                    stderr: "network error".to_string(),
                });
            }
            Ok(())
        }
    }

    fn minimal_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name":"x","version":"1.0.0"}"#,
        )
        .unwrap();
        dir
    }

    fn read(dir: &Path, file: &str) -> String {
        std::fs::read_to_string(dir.join(file)).unwrap()
    }

    fn manifest(dir: &Path) -> Value {
        serde_json::from_str(&read(dir, "package.json")).unwrap()
    }

    async fn run_setup(dir: &Path, runner: &FakeRunner) -> Result<Vec<String>, SetupError> {
        SetupContext::detect(&TailwindRnConfig, runner, dir)
            .run(&mut SilentReporter)
            .await
    }

    #[tokio::test]
    async fn test_full_run_on_minimal_project() {
        let dir = minimal_project();
        let runner = FakeRunner::default();

        let done = run_setup(dir.path(), &runner).await.unwrap();

        assert_eq!(
            done,
            vec!["Install dependencies", "Create Tailwind config", "Add scripts"]
        );
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "npm install tailwind-rn",
                "npm install --save-dev tailwindcss postcss concurrently",
            ]
        );

        assert_eq!(read(dir.path(), "tailwind.config.js"), TAILWIND_CONFIG);
        assert_eq!(read(dir.path(), "input.css"), "@tailwind utilities;\n");
        assert_eq!(read(dir.path(), "tailwind.css"), "\n");
        assert_eq!(read(dir.path(), "tailwind.json"), "{}\n");

        let json = manifest(dir.path());
        assert_eq!(json["name"], "x");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(
            json["scripts"]["build:tailwind"],
            "tailwindcss --input input.css --output tailwind.css --no-autoprefixer && tailwind-rn"
        );
        assert_eq!(
            json["scripts"]["dev:tailwind"],
            "concurrently \"tailwindcss --input input.css --output tailwind.css --no-autoprefixer --watch\" \"tailwind-rn --watch\""
        );
        assert_eq!(json["scripts"]["tailwind-rn"], "tailwind-rn");
    }

    #[tokio::test]
    async fn test_yarn_lockfile_selects_yarn() {
        let dir = minimal_project();
        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
        let runner = FakeRunner::default();

        run_setup(dir.path(), &runner).await.unwrap();

        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "yarn add tailwind-rn",
                "yarn add --dev tailwindcss postcss concurrently",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_manifest_keeps_scaffold_files() {
        let dir = TempDir::new().unwrap();
        let runner = FakeRunner::default();

        let err = run_setup(dir.path(), &runner).await.unwrap_err();

        match err {
            SetupError::TaskFailed { title, .. } => assert_eq!(title, "Add scripts"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("package.json").exists());
        for file in ["tailwind.config.js", "input.css", "tailwind.css", "tailwind.json"] {
            assert!(dir.path().join(file).is_file(), "{file} should remain");
        }
    }

    #[tokio::test]
    async fn test_install_failure_stops_before_files() {
        let dir = minimal_project();
        let before = read(dir.path(), "package.json");
        let runner = FakeRunner {
            fail_on_call: Some(0),
            ..Default::default()
        };

        let err = run_setup(dir.path(), &runner).await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("Install dependencies failed"));
        assert!(msg.contains("npm install tailwind-rn"));
        assert_eq!(runner.calls.borrow().len(), 1);
        for file in ["tailwind.config.js", "input.css", "tailwind.css", "tailwind.json"] {
            assert!(!dir.path().join(file).exists(), "{file} should not exist");
        }
        assert_eq!(read(dir.path(), "package.json"), before);
    }

    #[tokio::test]
    async fn test_dev_install_failure_also_stops() {
        let dir = minimal_project();
        let runner = FakeRunner {
            fail_on_call: Some(1),
            ..Default::default()
        };

        run_setup(dir.path(), &runner).await.unwrap_err();

        assert!(!dir.path().join("input.css").exists());
    }

    #[tokio::test]
    async fn test_second_run_gives_same_scripts() {
        let dir = minimal_project();

        run_setup(dir.path(), &FakeRunner::default()).await.unwrap();
        let first = manifest(dir.path());
        run_setup(dir.path(), &FakeRunner::default()).await.unwrap();
        let second = manifest(dir.path());

        assert_eq!(first["scripts"], second["scripts"]);
        assert_eq!(second["scripts"].as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_existing_scripts_are_overwritten() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name":"x","scripts":{"build:tailwind":"echo old","start":"expo start"}}"#,
        )
        .unwrap();

        run_setup(dir.path(), &FakeRunner::default()).await.unwrap();

        let json = manifest(dir.path());
        assert_eq!(json["scripts"]["build:tailwind"], BUILD_SCRIPT);
        assert_eq!(json["scripts"]["start"], "expo start");
    }

    #[test]
    fn test_summary_run_hint() {
        let yarn = render_summary(&TailwindRnConfig, PackageManager::Yarn);
        let npm = render_summary(&TailwindRnConfig, PackageManager::Npm);

        assert!(yarn.contains("yarn dev:tailwind"));
        assert!(!yarn.contains("npm run"));
        assert!(npm.contains("npm run dev:tailwind"));
    }

    #[test]
    fn test_summary_mentions_files_and_described_scripts() {
        let out = render_summary(&TailwindRnConfig, PackageManager::Npm);

        for file in ["tailwind.config.js", "input.css", "tailwind.css", "tailwind.json"] {
            assert!(out.contains(file));
        }
        assert!(out.contains("Watch mode for the command above"));
        assert!(out.contains(CONTENT_DOCS_URL));
    }

    #[test]
    fn test_config_template_references_unsupported_plugins() {
        assert!(TAILWIND_CONFIG.starts_with("module.exports = {\n"));
        assert!(TAILWIND_CONFIG.contains("content: [],"));
        assert!(TAILWIND_CONFIG.contains("require('tailwind-rn/unsupported-core-plugins')"));
        assert!(TAILWIND_CONFIG.ends_with("}\n"));
    }
}
