//! End-to-end resolver scenarios against a real filesystem layout: a temp
//! home directory, a temp configuration directory, and the real owner probe.

use std::fs;
use std::path::{Path, PathBuf};

use dirtitle_core::{
    CommandEnv, OverrideStore, Resolution, Settings, TitleOptions, TitleResolver, UserIdentity,
    EMPTY_OVERRIDE_TITLE, PLACEHOLDER_TITLE,
};
use tempfile::TempDir;

struct Fixture {
    _home: TempDir,
    _config: TempDir,
    home_path: String,
    config_path: PathBuf,
    resolver: TitleResolver,
}

fn fixture() -> Fixture {
    let home = TempDir::new().expect("temp home");
    let config = TempDir::new().expect("temp config");
    let home_path = home.path().to_str().expect("utf8 home").to_string();

    // SAFETY: getuid never fails and touches no memory.
    let uid = unsafe { libc::getuid() } as u32;
    let identity = UserIdentity::with_parts(uid, "tester", home_path.clone());
    let resolver = TitleResolver::new(
        identity,
        OverrideStore::with_dir(config.path()),
        Settings::default(),
    );

    Fixture {
        home_path,
        config_path: config.path().to_path_buf(),
        _home: home,
        _config: config,
        resolver,
    }
}

impl Fixture {
    fn mkdirs(&self, relative: &str) -> String {
        let dir = Path::new(&self.home_path).join(relative);
        fs::create_dir_all(&dir).expect("create dirs");
        dir.to_str().expect("utf8 dir").to_string()
    }

    fn write_override(&self, dpath: &str, content: &str) {
        let file = PathBuf::from(format!("{}{}.title", self.config_path.display(), dpath));
        fs::create_dir_all(file.parent().expect("parent")).expect("create override dirs");
        fs::write(&file, content).expect("write override");
    }
}

#[test]
fn home_short_and_long_titles_are_tilde() {
    let fx = fixture();
    assert_eq!(
        fx.resolver.short_title(&fx.home_path).expect("short"),
        Resolution::Stop("~".to_string())
    );
    assert_eq!(fx.resolver.long_title(&fx.home_path).expect("long"), "~");
}

#[test]
fn breadcrumb_under_home_walks_back_to_tilde() {
    let fx = fixture();
    let foo = fx.mkdirs("projects/foo");
    assert_eq!(
        fx.resolver.long_title(&foo).expect("long"),
        "foo ‹- projects ‹- ~"
    );
}

#[test]
fn short_title_of_owned_directory_is_the_segment() {
    let fx = fixture();
    let foo = fx.mkdirs("projects/foo");
    assert_eq!(
        fx.resolver.short_title(&foo).expect("short"),
        Resolution::Continue("foo".to_string())
    );
}

#[test]
fn override_wins_for_short_and_long_forms() {
    let fx = fixture();
    let foo = fx.mkdirs("projects/foo");
    fx.write_override(&foo, "Big Project\n");

    assert_eq!(
        fx.resolver.short_title(&foo).expect("short"),
        Resolution::Stop("Big Project".to_string())
    );
    assert_eq!(fx.resolver.long_title(&foo).expect("long"), "Big Project");
}

#[test]
fn override_on_an_ancestor_truncates_the_breadcrumb() {
    let fx = fixture();
    let projects = fx.mkdirs("projects");
    let foo = fx.mkdirs("projects/foo");
    fx.write_override(&projects, "Work");

    assert_eq!(fx.resolver.long_title(&foo).expect("long"), "foo ‹- Work");
}

#[test]
fn whitespace_override_maps_to_terminal() {
    let fx = fixture();
    let foo = fx.mkdirs("projects/foo");
    fx.write_override(&foo, "   \n\t");

    assert_eq!(
        fx.resolver.long_title(&foo).expect("long"),
        EMPTY_OVERRIDE_TITLE
    );
}

#[test]
fn missing_directory_shows_the_full_path() {
    let fx = fixture();
    let gone = format!("{}/does-not-exist", fx.home_path);
    assert_eq!(
        fx.resolver.short_title(&gone).expect("short"),
        Resolution::Stop(gone.clone())
    );
}

#[test]
fn dot_directory_is_a_placeholder() {
    let fx = fixture();
    let hidden = fx.mkdirs("projects/.cache");
    assert_eq!(
        fx.resolver.short_title(&hidden).expect("short"),
        Resolution::Stop(PLACEHOLDER_TITLE.to_string())
    );
}

#[test]
fn dot_directory_terminates_the_breadcrumb() {
    let fx = fixture();
    let inner = fx.mkdirs(".cache/assets/img");
    assert_eq!(
        fx.resolver.long_title(&inner).expect("long"),
        "img ‹- assets ‹-  "
    );
}

#[test]
fn command_overlay_rides_on_the_short_title() {
    let fx = fixture();
    let foo = fx.mkdirs("projects/foo");
    let options = TitleOptions {
        long: true,
        show_command: true,
    };
    let commands = CommandEnv::with_parts(Some("cargo test"), None);
    assert_eq!(
        fx.resolver.title(&foo, options, &commands).expect("title"),
        "foo: cargo test"
    );
}
