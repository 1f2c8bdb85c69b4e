use crate::settings::Settings;
use std::borrow::Cow;
use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{error, info};
use wslaunch_core::{command_key, to_wsl_mount, EditorVariant, Environment, TranslateError, WorkspaceItem};

/// Characters that must never appear in a path handed to a launch
/// command. We spawn without a shell, but templates come from user
/// config and may route through `cmd.exe` or `wsl.exe`.
const DENIED_PATH_CHARS: &[char] = &[';', '$', '&', '|', '<', '>', '(', ')', '{', '}', '!', '#'];

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no launch command configured for '{0}'")]
    Configuration(&'static str),

    #[error("launch template for '{0}' has no executable")]
    MalformedTemplate(&'static str),

    #[error("refusing path with shell metacharacters: {0}")]
    UnsafePath(String),

    #[error("cannot translate workspace path for WSL: {0}")]
    Translate(#[from] TranslateError),

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// A fully resolved launch command: program plus argument vector,
/// ready to spawn without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Shell-quoted rendering of the command line, for the log.
    pub fn render(&self) -> String {
        let mut parts = vec![shell_escape::escape(Cow::from(self.program.as_str())).into_owned()];
        parts.extend(
            self.args
                .iter()
                .map(|a| shell_escape::escape(Cow::from(a.as_str())).into_owned()),
        );
        parts.join(" ")
    }
}

/// Resolve the launch command for an item without spawning anything.
///
/// Selects the `launch_options` template for the item's environment and
/// the chosen variant, translates the workspace path to its WSL mount
/// form for WSL targets (a pure string transformation), and appends the
/// path as the final argument.
pub fn build_invocation(
    settings: &Settings,
    item: &WorkspaceItem,
    variant: EditorVariant,
) -> Result<Invocation, LaunchError> {
    let key = command_key(item.environment, variant);
    let template = settings
        .launch_template(item.environment, variant)
        .ok_or(LaunchError::Configuration(key))?;

    let mut parts = template.split_whitespace();
    let program = parts
        .next()
        .ok_or(LaunchError::MalformedTemplate(key))?
        .to_string();
    let mut args: Vec<String> = parts.map(str::to_string).collect();

    let path = item.path.to_string_lossy();
    let path = match item.environment {
        Environment::Wsl => to_wsl_mount(&path)?,
        Environment::Windows => path.into_owned(),
    };

    if path.contains(DENIED_PATH_CHARS) {
        return Err(LaunchError::UnsafePath(path));
    }

    args.push(path);

    Ok(Invocation { program, args })
}

/// Resolves launch commands against the loaded settings and spawns
/// them as detached, fire-and-forget processes.
pub struct LaunchDispatcher {
    settings: Settings,
}

impl LaunchDispatcher {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Launch `item` with the chosen variant. The child is never waited
    /// on; failures are reported to the caller for a status-bar
    /// notification and the application keeps running.
    pub fn launch(&self, item: &WorkspaceItem, variant: EditorVariant) -> Result<(), LaunchError> {
        let invocation = build_invocation(&self.settings, item, variant)?;

        info!(
            workspace = %item.display_name,
            environment = %item.environment,
            variant = %variant,
            command = %invocation.render(),
            "launching workspace"
        );

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Detach so the editor outlives the launcher.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const DETACHED_PROCESS: u32 = 0x0000_0008;
            const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
            command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
        }

        match command.spawn() {
            Ok(child) => {
                info!(pid = child.id(), "spawned");
                Ok(())
            }
            Err(source) => {
                error!(
                    command = %invocation.render(),
                    error = %source,
                    "failed to spawn launch command"
                );
                Err(LaunchError::Spawn {
                    program: invocation.program,
                    source,
                })
            }
        }
    }
}
