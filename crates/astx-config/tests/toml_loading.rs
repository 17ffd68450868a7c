//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory
//! manipulation.

use astx_config::{AstxConfig, ConfigError, DirectoryConfig, ExtractConfig, OutputConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[extract]
imports = false

[directory]
include_tests = false

[output]
pretty = false
",
        )?;

        let config: AstxConfig = Figment::from(Serialized::defaults(AstxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config,
            AstxConfig {
                extract: ExtractConfig {
                    imports: false,
                    records: true,
                },
                directory: DirectoryConfig {
                    include_tests: false,
                },
                output: OutputConfig { pretty: false },
            }
        );
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        std::fs::create_dir(".astx").expect("create .astx");
        jail.create_file(".astx/config.toml", "[extract]\nrecords = false\n")?;

        let config = AstxConfig::load().expect("config loads");
        assert!(config.extract.imports);
        assert!(!config.extract.records);
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn project_local_beats_user_global() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        std::fs::create_dir_all(xdg.join("astx")).expect("create global dir");
        std::fs::write(
            xdg.join("astx/config.toml"),
            "[directory]\ninclude_tests = false\n\n[output]\npretty = false\n",
        )
        .expect("write global config");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());

        std::fs::create_dir(".astx").expect("create .astx");
        jail.create_file(".astx/config.toml", "[output]\npretty = true\n")?;

        let config = AstxConfig::load().expect("config loads");
        assert!(!config.directory.include_tests);
        assert!(config.output.pretty);
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_local() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        std::fs::create_dir(".astx").expect("create .astx");
        jail.create_file(".astx/config.toml", "[extract]\nimports = false\n")?;
        jail.create_file("other.toml", "[extract]\nrecords = false\n")?;

        let config = AstxConfig::load_from("other.toml").expect("config loads");
        assert!(config.extract.imports);
        assert!(!config.extract.records);
        Ok(())
    });
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = AstxConfig::load_from(dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::MissingFile { .. }), "err: {err:?}");
}

#[test]
fn wrong_value_type_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_file("bad.toml", "[extract]\nimports = \"sometimes\"\n")?;

        let err = AstxConfig::load_from("bad.toml").expect_err("type mismatch");
        assert!(matches!(err, ConfigError::Figment(_)), "err: {err:?}");
        Ok(())
    });
}
