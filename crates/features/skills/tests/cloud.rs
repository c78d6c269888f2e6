use folio_domain::content::{Skill, SkillCategory};
use folio_skills::{CLOUD_RADIUS, CONNECTION_DISTANCE, SkillCloud, category_color};

fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill { name: name.to_owned(), category }
}

#[test]
fn words_sit_on_the_sphere_from_pole_to_pole() {
    let content = folio_kernel::content::embedded().expect("embedded content");
    let cloud = SkillCloud::new(&content.skills, CLOUD_RADIUS);

    assert_eq!(cloud.words().len(), content.skills.len());
    for word in cloud.words() {
        assert!((word.position.length() - CLOUD_RADIUS).abs() < 1e-9);
    }
    let first = cloud.words().first().expect("first word").position;
    let last = cloud.words().last().expect("last word").position;
    assert!((first.y - CLOUD_RADIUS).abs() < 1e-9);
    assert!((last.y + CLOUD_RADIUS).abs() < 1e-9);
}

#[test]
fn connections_join_only_close_pairs_once() {
    let content = folio_kernel::content::embedded().expect("embedded content");
    let cloud = SkillCloud::new(&content.skills, CLOUD_RADIUS);

    for &(i, j) in cloud.connections() {
        assert!(i < j);
        let d = cloud.words()[i].position.distance(cloud.words()[j].position);
        assert!(d < CONNECTION_DISTANCE);
    }
}

#[test]
fn colours_follow_category() {
    let cloud = SkillCloud::new(
        &[skill("Strategy", SkillCategory::Core), skill("Splunk", SkillCategory::Tool)],
        CLOUD_RADIUS,
    );
    assert_eq!(cloud.words()[0].color, category_color(SkillCategory::Core));
    assert_eq!(cloud.words()[1].color, "#e2e8f0");
}

#[test]
fn single_skill_lands_on_equator() {
    let cloud = SkillCloud::new(&[skill("Solo", SkillCategory::Tech)], 5.0);
    assert!(cloud.words()[0].position.y.abs() < 1e-9);
    assert!(cloud.connections().is_empty());
}

#[test]
fn spin_rotates_positions_but_keeps_radius() {
    let mut cloud = SkillCloud::new(
        &[skill("A", SkillCategory::Core), skill("B", SkillCategory::Tech), skill("C", SkillCategory::Tool)],
        CLOUD_RADIUS,
    );
    let before = cloud.rotated(1).expect("word");
    cloud.spin(600.0);
    let after = cloud.rotated(1).expect("word");

    assert!((cloud.rotation() - 0.6).abs() < 1e-12);
    assert!((after.length() - before.length()).abs() < 1e-9);
    assert!(after.distance(before) > 0.1);
}
