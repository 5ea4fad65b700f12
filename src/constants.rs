//! Names, templates, and version thresholds shared across the crate.

/// Configuration whose declared dependencies are linked by default.
pub const DEFAULT_CONFIGURATION: &str = "apiElements";

/// Resolved configuration walked to find selected dependency versions.
pub const COMPILE_CLASSPATH_CONFIGURATION: &str = "compileClasspath";

/// Legacy index file name written by javadoc before JDK 9.
pub const PACKAGE_LIST: &str = "package-list";

/// Index file name written by javadoc since JDK 9.
pub const ELEMENT_LIST: &str = "element-list";

/// Index file names in the order they are tried when fetching.
pub const INDEX_FILE_NAMES: [&str; 2] = [PACKAGE_LIST, ELEMENT_LIST];

/// Default documentation location for published modules.
pub const DEFAULT_URL_TEMPLATE: &str = "https://javadoc.io/doc/{group}/{name}/{version}/";

/// Platform documentation layout used from Java 11 onwards.
pub const JAVASE_DOCS_TEMPLATE: &str = "https://docs.oracle.com/en/java/javase/{major}/docs/api/";

/// Platform documentation layout used up to Java 10.
pub const LEGACY_JAVASE_DOCS_TEMPLATE: &str = "https://docs.oracle.com/javase/{major}/docs/api/";

/// First major version served by [`JAVASE_DOCS_TEMPLATE`].
pub const JAVASE_DOCS_TEMPLATE_SINCE: u32 = 11;

/// First major version whose javadoc resolves `element-list` reliably when linking online.
pub const DIRECT_LINK_SINCE: u32 = 10;

/// Default offline cache root, relative to the working directory.
pub const DEFAULT_WORK_DIR: &str = "build/tmp/javadocLinks";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "javadoc-links.toml";

/// Environment variable that points at an alternative configuration file.
pub const CONFIG_ENV_VAR: &str = "JAVADOC_LINKS_CONFIG";
