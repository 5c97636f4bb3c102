//! Per-file invocation orchestration for one registered adapter.

use crate::contract::{ArgumentContract, Settings, ToolIntegration};
use crate::diff;
use crate::error::AdapterError;
use crate::pattern;
use crate::spec::{AdapterSpec, OutputInterpretation};
use relint_diagnostics::Diagnostic;
use relint_exec::{execute, find_executable, ScopedConfigFile};
use std::path::Path;
use std::time::Duration;

/// One registered adapter: a sealed spec paired with its tool integration.
///
/// Registration validates the integration's declared settings contract and
/// caches it; afterwards the runner is immutable and safe to share across
/// threads, so the engine may invoke it on many files concurrently. Each
/// invocation is synchronous and isolated: it materializes its own config
/// file (removed on every exit path) and returns a fresh diagnostic
/// sequence.
pub struct LintRunner {
    spec: AdapterSpec,
    tool: Box<dyn ToolIntegration>,
    contract: ArgumentContract,
    timeout: Option<Duration>,
}

impl LintRunner {
    /// Registers a tool integration under a sealed adapter spec.
    ///
    /// Fails with a contract violation when the integration's declared
    /// settings contract is unusable; per the propagation policy, that
    /// aborts registration before any file is processed.
    pub fn register(
        spec: AdapterSpec,
        tool: Box<dyn ToolIntegration>,
    ) -> Result<Self, AdapterError> {
        let contract = tool.settings_contract();
        contract.validate()?;
        Ok(Self {
            spec,
            tool,
            contract,
            timeout: None,
        })
    }

    /// Sets a deadline for the external process. When exceeded the child
    /// is killed and the invocation fails as an execution error. Without a
    /// deadline a hung tool blocks the invocation indefinitely.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// The adapter's display name, used as the diagnostic origin.
    pub fn name(&self) -> &str {
        self.tool.name()
    }

    /// The sealed adapter spec.
    pub fn spec(&self) -> &AdapterSpec {
        &self.spec
    }

    /// The cached settings contract of the tool integration.
    pub fn contract(&self) -> &ArgumentContract {
        &self.contract
    }

    /// Checks whether the external tool can run in this environment.
    ///
    /// Returns a human-readable reason when it cannot; the engine consults
    /// this before any invocation and simply skips the adapter, which is
    /// not a failure of the overall run.
    pub fn check_prerequisites(&self) -> Result<(), String> {
        match find_executable(self.spec.executable()) {
            Some(_) => Ok(()),
            None => Err(format!("'{}' is not installed.", self.spec.executable())),
        }
    }

    /// Runs the tool once for `filename` and converts its output into
    /// diagnostics.
    ///
    /// The settings bundle is resolved against the adapter's contract.
    /// When the integration generates config contents, they are
    /// materialized into a scoped temporary file whose path is handed to
    /// `create_arguments`; the file is deleted when this call returns,
    /// successfully or not. The tool's exit status is deliberately
    /// ignored: diagnostics derive purely from the selected output stream.
    pub fn run(
        &self,
        filename: &Path,
        file: &str,
        settings: &Settings,
    ) -> Result<Vec<Diagnostic>, AdapterError> {
        let settings = self.contract.resolve(settings)?;

        let config = match self.tool.generate_config(filename, file, &settings) {
            Some(contents) => Some(ScopedConfigFile::create(
                self.spec.config_suffix(),
                &contents,
            )?),
            None => None,
        };

        let mut argv = vec![self.spec.executable().to_string()];
        argv.extend(self.tool.create_arguments(
            filename,
            file,
            config.as_ref().map(ScopedConfigFile::path),
            &settings,
        ));

        let stdin = self.spec.use_stdin().then_some(file);
        let output = execute(&argv, stdin, self.timeout)?;
        let text = if self.spec.use_stderr() {
            &output.stderr
        } else {
            &output.stdout
        };

        log::debug!(
            "{}: interpreting {} bytes of {} for {}",
            self.name(),
            text.len(),
            if self.spec.use_stderr() { "stderr" } else { "stdout" },
            filename.display()
        );

        let filename_str = filename.to_string_lossy();
        match self.spec.interpretation() {
            OutputInterpretation::Pattern {
                regex,
                severity_map,
            } => pattern::extract(self.name(), &filename_str, text, regex, severity_map.as_ref()),
            OutputInterpretation::Diff { severity, message } => Ok(diff::extract(
                self.name(),
                &filename_str,
                file,
                text,
                *severity,
                message,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{SettingKind, SettingSpec};
    use crate::error::ErrorKind;

    struct NullTool;

    impl ToolIntegration for NullTool {
        fn name(&self) -> &str {
            "NullTool"
        }

        fn create_arguments(
            &self,
            _filename: &Path,
            _file: &str,
            _config_file: Option<&Path>,
            _settings: &Settings,
        ) -> Vec<String> {
            Vec::new()
        }
    }

    struct BrokenContractTool;

    impl ToolIntegration for BrokenContractTool {
        fn name(&self) -> &str {
            "BrokenContractTool"
        }

        fn settings_contract(&self) -> ArgumentContract {
            ArgumentContract::new(vec![SettingSpec::required("config_file", SettingKind::Str)])
        }

        fn create_arguments(
            &self,
            _filename: &Path,
            _file: &str,
            _config_file: Option<&Path>,
            _settings: &Settings,
        ) -> Vec<String> {
            Vec::new()
        }
    }

    fn pattern_spec(executable: &str) -> AdapterSpec {
        AdapterSpec::builder(executable)
            .output_regex(r"(?P<line>\d+): (?P<message>.+)")
            .build()
            .unwrap()
    }

    #[test]
    fn registration_caches_contract() {
        let runner = LintRunner::register(pattern_spec("xlint"), Box::new(NullTool)).unwrap();
        assert_eq!(runner.name(), "NullTool");
        assert!(runner.contract().settings().is_empty());
    }

    #[test]
    fn registration_rejects_broken_contract() {
        // `.err()` rather than `.unwrap_err()`: the success value holds a
        // boxed integration and has no Debug representation.
        let err = LintRunner::register(pattern_spec("xlint"), Box::new(BrokenContractTool))
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
    }

    #[test]
    fn missing_tool_fails_prerequisites() {
        let runner =
            LintRunner::register(pattern_spec("relint-no-such-tool-xyz"), Box::new(NullTool))
                .unwrap();
        let reason = runner.check_prerequisites().unwrap_err();
        assert_eq!(reason, "'relint-no-such-tool-xyz' is not installed.");
    }

    #[test]
    fn unstartable_tool_is_execution_error() {
        let runner =
            LintRunner::register(pattern_spec("relint-no-such-tool-xyz"), Box::new(NullTool))
                .unwrap();
        let err = runner
            .run(Path::new("f.c"), "", &Settings::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Execution);
    }
}
