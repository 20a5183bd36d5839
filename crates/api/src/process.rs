use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;
use widget_bridge_core::{Method, PositionalArgs, Rpc, RpcResult};

/// A program for the host to run.
///
/// The host resolves `executable` from the widget's `scripts` directory,
/// which is also the working directory of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecParams {
    /// e.g. `python`, or `./run.sh` for a script inside the widget.
    pub executable: String,
    /// e.g. `["-m", "pip", "install", "--user", "-r", "requirements"]`.
    pub arguments: Vec<String>,
}

impl ExecParams {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn args<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }
}

impl PositionalArgs for ExecParams {
    /// Executable first, then its arguments in order.
    fn positional(&self) -> Vec<String> {
        let mut command = Vec::with_capacity(self.arguments.len() + 1);
        command.push(self.executable.clone());
        command.extend(self.arguments.iter().cloned());
        command
    }
}

#[derive(Debug, Clone)]
pub struct ProcessApi {
    rpc: Rpc,
}

impl ProcessApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    /// Run a program on the host and return its captured stdout.
    ///
    /// The host parses this call's argument as a string list under every
    /// convention, so it is always sent positionally. Output that happens to
    /// be valid JSON is decoded by the host; it is rendered back to text here.
    pub async fn exec(&self, params: &ExecParams) -> RpcResult<String> {
        trace!("Request exec: {} {:?}", params.executable, params.arguments);
        let output = self
            .rpc
            .invoke(Method::Exec, params.positional().into())
            .await?;
        Ok(match output {
            Value::String(text) => text,
            other => other.to_string(),
        })
    }
}
