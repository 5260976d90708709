//! Fixed file signatures that identify scripts and tests.
//!
//! Name comparisons are made against the lowercased file name.

/// Native load-test script (`.usr`).
pub const USR_EXTENSION: &str = ".usr";

/// JMeter test plan.
pub const JMX_EXTENSION: &str = ".jmx";

/// Gatling simulation.
pub const GATLING_EXTENSION: &str = ".scala";

/// Suffixes recognized from the file name alone.
pub const SCRIPT_EXTENSIONS: [&str; 3] = [USR_EXTENSION, JMX_EXTENSION, GATLING_EXTENSION];

/// Entry point of a multi-file DevWeb script.
pub const DEVWEB_MAIN_FILE: &str = "main.js";

/// Runtime settings that must sit next to [`DEVWEB_MAIN_FILE`].
pub const DEVWEB_RTS_FILE: &str = "rts.yml";

/// Browser-automation script source.
pub const SELENIUM_EXTENSION: &str = ".java";

/// Content marker a [`SELENIUM_EXTENSION`] file must contain to count as a script.
pub const SELENIUM_CONTENT_MARKER: &str = "import org.openqa.selenium";

pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

pub const XML_EXTENSION: &str = "xml";
