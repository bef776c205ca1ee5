//! The rebuild decision engine.
//!
//! One [`Builder`] instance owns the dependency cache and artifact
//! fingerprint for one build directory. A call to [`build`](Builder::build)
//! runs one synchronous pass: sysroot resolution, per-unit compile decisions,
//! conditional relink, fingerprint update. Concurrent passes against the same
//! build directory are not supported; the surrounding controller serializes.

use std::path::{Path, PathBuf};

use cinder_cache::{hash_file, DepCache, FingerprintStore};
use cinder_common::ContentHash;
use cinder_config::{split_flags, ResolvedToolchain};

use crate::error::BuildError;
use crate::log::BuildLog;
use crate::project::{FileKind, LocationGroup, SourceUnit};
use crate::runner::{ProcessOutput, ProcessRunner};

/// What one successful build pass decided and produced.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Content digest of the artifact, freshly linked or reused.
    pub artifact: ContentHash,
    /// Whether the linker ran this pass.
    pub relinked: bool,
    /// Basenames of the units compiled this pass, in project order.
    pub compiled: Vec<String>,
    /// Basenames of the units skipped as unchanged, in project order.
    pub passed: Vec<String>,
}

/// Incremental build orchestrator for one project and build directory.
pub struct Builder {
    toolchain: ResolvedToolchain,
    build_path: PathBuf,
    bin_name: String,
    bin_path: PathBuf,
    deps: DepCache,
    fingerprint: FingerprintStore,
    project_name: String,
}

impl Builder {
    /// Creates a builder for `project_name` over `build_path`.
    ///
    /// The artifact path is fixed at
    /// `<build_path>/<project_name><bin_extension>`.
    pub fn new(project_name: &str, toolchain: ResolvedToolchain, build_path: &Path) -> Self {
        let bin_name = format!("{project_name}{}", toolchain.bin_extension);
        let bin_path = build_path.join(&bin_name);
        Self {
            toolchain,
            build_path: build_path.to_path_buf(),
            bin_name,
            bin_path,
            deps: DepCache::new(build_path),
            fingerprint: FingerprintStore::new(build_path),
            project_name: project_name.to_string(),
        }
    }

    /// Rebinds the builder to a different build directory.
    ///
    /// The dependency cache and the in-memory fingerprint are discarded along
    /// with the old directory; rebinding to the current directory is a no-op.
    pub fn set_build_path(&mut self, build_path: &Path) {
        if self.build_path != build_path {
            self.build_path = build_path.to_path_buf();
            self.bin_path = build_path.join(&self.bin_name);
            self.deps.rebind(build_path);
            self.fingerprint.rebind(build_path);
        }
    }

    /// Fixed path of the linked artifact.
    pub fn artifact_path(&self) -> &Path {
        &self.bin_path
    }

    /// File name of the linked artifact.
    pub fn artifact_name(&self) -> &str {
        &self.bin_name
    }

    /// Digest of the last successfully linked artifact, if one is recorded.
    ///
    /// Answered from the fingerprint store; the artifact file itself is never
    /// re-hashed here.
    pub fn artifact_digest(&self) -> Option<ContentHash> {
        self.fingerprint.get()
    }

    /// Clears the recorded artifact digest, in memory and on disk.
    pub fn reset_artifact_digest(&mut self) {
        self.fingerprint.reset();
    }

    /// Hashes the concatenated text of every compilable unit and its
    /// transitive includes, in project order.
    ///
    /// A coarse whole-project source fingerprint for external consumers that
    /// want "did any source change" without a build pass.
    pub fn source_digest(&self, project: &[LocationGroup]) -> Result<ContentHash, BuildError> {
        let mut whole = String::new();
        for group in project {
            for unit in &group.units {
                if unit.kind() == Some(FileKind::Source) {
                    whole.push_str(&self.deps.concat_source(unit.basename())?);
                }
            }
        }
        Ok(ContentHash::from_bytes(whole.as_bytes()))
    }

    /// Runs one build pass over the project descriptor.
    ///
    /// Changed units (directly or through their include chain) are compiled;
    /// unchanged units are skipped with a `[pass]` log line. The linker runs
    /// if any unit changed or the artifact is absent. On success the
    /// artifact's digest is recorded in memory and on disk.
    ///
    /// Failures are logged on the error channel and abort the pass: a single
    /// failing unit aborts the whole build with its cache record evicted, and
    /// a failed link leaves the previous fingerprint untouched on disk.
    pub fn build(
        &mut self,
        project: &[LocationGroup],
        runner: &dyn ProcessRunner,
        log: &dyn BuildLog,
    ) -> Result<BuildOutcome, BuildError> {
        let mut toolchain = self.toolchain.clone();
        if toolchain.needs_sysroot() {
            let sysroot = self.query_sysroot(&toolchain, runner, log)?;
            toolchain.substitute_sysroot(&sysroot);
        }

        self.deps.begin_pass();

        let mut relink = !self.bin_path.is_file();
        let mut object_names: Vec<String> = Vec::new();
        let mut objects: Vec<PathBuf> = Vec::new();
        let mut compiled: Vec<String> = Vec::new();
        let mut passed: Vec<String> = Vec::new();

        for group in project {
            if !group.units.is_empty() {
                if group.label.is_empty() {
                    log.write(&format!("{} :", self.project_name));
                } else {
                    log.write(&format!("{} :", group.label));
                }
            }

            for unit in &group.units {
                match unit.kind() {
                    Some(FileKind::Source) => {
                        let bn = unit.basename().to_string();
                        let obn = unit.object_name();

                        if self.deps.check_and_update(&bn) {
                            log.write(&format!("   [pass]  {bn} -> {obn}"));
                            passed.push(bn);
                        } else {
                            relink = true;
                            log.write(&format!("   [CC]  {bn} -> {obn}"));
                            self.compile_unit(unit, &toolchain, runner, log)?;
                            compiled.push(bn);
                        }

                        object_names.push(obn);
                        objects.push(unit.object_path());
                    }
                    Some(FileKind::Object) => {
                        object_names.push(unit.basename().to_string());
                        objects.push(unit.path.clone());
                    }
                    None => {}
                }
            }
        }

        log.write("Linking :");
        if relink {
            log.write(&format!(
                "   [CC]  {} -> {}",
                object_names.join(" "),
                self.bin_name
            ));
            self.link(&objects, &toolchain, runner, log)?;
        } else {
            log.write(&format!(
                "   [pass]  {} -> {}",
                object_names.join(" "),
                self.bin_name
            ));
        }

        let artifact = hash_file(&self.bin_path)?;
        self.fingerprint.set(artifact)?;

        Ok(BuildOutcome {
            artifact,
            relinked: relink,
            compiled,
            passed,
        })
    }

    /// Asks the compiler for its sysroot. Fatal on any failure; no partial
    /// work is attempted.
    fn query_sysroot(
        &self,
        toolchain: &ResolvedToolchain,
        runner: &dyn ProcessRunner,
        log: &dyn BuildLog,
    ) -> Result<String, BuildError> {
        match runner.run(&toolchain.compiler, &["-print-sysroot".to_string()]) {
            Ok(out) if out.success() => Ok(out.stdout.trim().to_string()),
            Ok(_) => {
                log.write_error(&format!(
                    "{} failed with -print-sysroot",
                    toolchain.compiler
                ));
                Err(BuildError::SysrootQuery {
                    compiler: toolchain.compiler.clone(),
                })
            }
            Err(err) => {
                log.write_error(&format!("{} not found", toolchain.compiler));
                Err(err)
            }
        }
    }

    fn compile_unit(
        &mut self,
        unit: &SourceUnit,
        toolchain: &ResolvedToolchain,
        runner: &dyn ProcessRunner,
        log: &dyn BuildLog,
    ) -> Result<(), BuildError> {
        let bn = unit.basename().to_string();

        let mut args = vec![
            "-c".to_string(),
            unit.path.display().to_string(),
            "-o".to_string(),
            unit.object_path().display().to_string(),
            "-O2".to_string(),
        ];
        args.extend(toolchain.cflags.iter().cloned());
        args.extend(split_flags(&unit.cflags));

        let result = runner.run(&toolchain.compiler, &args);
        if let Ok(out) = &result {
            forward_output(out, log);
            if out.success() {
                return Ok(());
            }
        }

        // Failed unit: force full re-detection on the next attempt.
        self.deps.evict(&bn);
        log.write_error(&format!("C compilation of {bn} failed."));
        match result {
            Err(err) => Err(err),
            Ok(_) => Err(BuildError::CompileFailed { unit: bn }),
        }
    }

    fn link(
        &self,
        objects: &[PathBuf],
        toolchain: &ResolvedToolchain,
        runner: &dyn ProcessRunner,
        log: &dyn BuildLog,
    ) -> Result<(), BuildError> {
        let mut args: Vec<String> = objects.iter().map(|p| p.display().to_string()).collect();
        args.push("-o".to_string());
        args.push(self.bin_path.display().to_string());
        args.extend(toolchain.ldflags.iter().cloned());

        let result = runner.run(&toolchain.linker, &args);
        if let Ok(out) = &result {
            forward_output(out, log);
            if out.success() {
                return Ok(());
            }
        }

        log.write_error(&format!("link of {} failed.", self.bin_name));
        match result {
            Err(err) => Err(err),
            Ok(_) => Err(BuildError::LinkFailed {
                artifact: self.bin_name.clone(),
            }),
        }
    }
}

/// Relays captured tool output into the build log, stdout on the progress
/// channel and stderr on the error channel.
fn forward_output(out: &ProcessOutput, log: &dyn BuildLog) {
    for line in out.stdout.lines() {
        log.write(line);
    }
    for line in out.stderr.lines() {
        log.write_error(line);
    }
}
