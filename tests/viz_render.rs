use agify_rs::stats::NameStats;
use agify_rs::viz;
use std::fs;

fn sample_stats(names: &[(&str, u32, u64)]) -> NameStats {
    let mut stats = NameStats::default();
    for (name, age, count) in names {
        stats.age_by_name.insert(name.to_string(), *age);
        stats.count_by_name.insert(name.to_string(), *count);
    }
    stats
}

#[test]
fn renders_svg_and_png_files() {
    let stats = sample_stats(&[("alice", 60, 31145), ("bob", 66, 22119), ("carol", 71, 9000)]);
    let dir = tempfile::tempdir().unwrap();

    for name in ["chart.svg", "chart.png"] {
        let path = dir.path().join(name);
        viz::plot_stats(&stats, "names_reduced.txt", &path, 640, 480).unwrap();
        let meta = fs::metadata(&path).expect("file created");
        assert!(meta.len() > 0, "{name} has content");
    }
}

#[test]
fn single_name_still_renders() {
    let stats = sample_stats(&[("alice", 60, 31145)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.svg");
    viz::plot_stats(&stats, "one.txt", &path, 640, 480).unwrap();
    assert!(path.exists());
}

#[test]
fn empty_stats_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let err = viz::plot_stats(&NameStats::default(), "x.txt", &path, 640, 480).unwrap_err();
    assert!(err.to_string().contains("no data"));
}
