mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_dry_run_leaves_tree_untouched() {
    let temp = create_tree(&[
        ("app/model.php", "class Discussion {}\n"),
        ("webroot/js/app.js", "discussion();\n"),
    ]);
    let before = snapshot(temp.path());

    run_splace(temp.path(), &["-t", "contents", "iscussion", "iscourse"])
        .success()
        .stdout(predicate::str::contains("FILES TO SEARCH CONTENT"))
        .stdout(predicate::str::contains("app/model.php\n   1: class Discussion {}"))
        .stdout(predicate::str::ends_with("   1: discussion();\n\n"));

    assert_eq!(snapshot(temp.path()), before);
}

#[test]
fn test_for_real_replaces_every_occurrence() {
    let temp = create_tree(&[("a.php", "<?php $X = new X();\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", "X", "Y"])
        .success()
        .stdout(predicate::str::contains("   1: <?php $X = new X();"))
        .stdout(predicate::str::ends_with("   1: <?php $X = new X();\n\n"));

    let contents = fs::read_to_string(temp.path().join("a.php")).unwrap();
    assert_eq!(contents, "<?php $Y = new Y();\n");
    assert_eq!(contents.matches('X').count(), 0);
}

#[test]
fn test_ignored_directory_is_never_reported_or_modified() {
    let temp = create_tree(&[
        ("tmp/cache/view.php", "from here\n"),
        ("app/view.ctp", "from there\n"),
    ]);

    run_splace(temp.path(), &["-f", "-t", "contents", "from", "to"])
        .success()
        .stdout(predicate::str::contains("app/view.ctp"))
        .stdout(predicate::str::contains("tmp/cache/view.php").not());

    assert_eq!(
        fs::read_to_string(temp.path().join("tmp/cache/view.php")).unwrap(),
        "from here\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("app/view.ctp")).unwrap(),
        "to there\n"
    );
}

#[test]
fn test_preview_lists_each_matching_line_once_in_order() {
    let temp = create_tree(&[(
        "a.css",
        ".from {}\n.other {}\n.from .from {}\n\n.from-x {}\n",
    )]);

    for extra in [&[][..], &["-f"][..]] {
        let args: Vec<&str> = extra
            .iter()
            .copied()
            .chain(["-t", "contents", "from", "to"])
            .collect();
        let output = run_splace(temp.path(), &args).success();
        let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

        if extra.is_empty() {
            let numbers: Vec<&str> = stdout
                .lines()
                .filter_map(|l| l.strip_prefix("   "))
                .filter_map(|l| l.split(':').next())
                .collect();
            assert_eq!(numbers, vec!["1", "3", "5"]);
        } else {
            // Preview still runs, against the pre-replacement content.
            assert!(stdout.contains("   3: .from .from {}"));
        }
    }

    assert_eq!(
        fs::read_to_string(temp.path().join("a.css")).unwrap(),
        ".to {}\n.other {}\n.to .to {}\n\n.to-x {}\n"
    );
}

#[test]
fn test_literal_flag_disables_regex() {
    let temp = create_tree(&[("a.js", "a.b();\naxb();\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", "--literal", "a.b", "c"]).success();

    assert_eq!(
        fs::read_to_string(temp.path().join("a.js")).unwrap(),
        "c();\naxb();\n"
    );
}

#[test]
fn test_regex_backreferences() {
    let temp = create_tree(&[("a.php", "$userModel; $postModel;\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", r"(\w+)Model", "${1}Entity"]).success();

    assert_eq!(
        fs::read_to_string(temp.path().join("a.php")).unwrap(),
        "$userEntity; $postEntity;\n"
    );
}

#[test]
fn test_extension_override() {
    let temp = create_tree(&[("src/lib.rs", "old\n"), ("src/app.php", "old\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", "--ext", "rs", "old", "new"]).success();

    assert_eq!(fs::read_to_string(temp.path().join("src/lib.rs")).unwrap(), "new\n");
    assert_eq!(fs::read_to_string(temp.path().join("src/app.php")).unwrap(), "old\n");
}

#[test]
fn test_no_matches() {
    let temp = create_tree(&[("a.php", "nothing\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", "absent", "x"])
        .success()
        .stdout(predicate::str::ends_with("FILES TO SEARCH CONTENT\n\n"));

    assert_eq!(fs::read_to_string(temp.path().join("a.php")).unwrap(), "nothing\n");
}

#[test]
fn test_end_anchor_matches_in_crlf_files() {
    let temp = create_tree(&[("a.php", "the end\r\nnot\r\n")]);

    run_splace(temp.path(), &["-f", "-t", "contents", "end$", "finish"])
        .success()
        .stdout(predicate::str::contains("a.php\n   1: the end\n"));

    assert_eq!(
        fs::read_to_string(temp.path().join("a.php")).unwrap(),
        "the finish\r\nnot\r\n"
    );
}
