use super::*;

fn hrefs(role: Option<Role>) -> Vec<&'static str> {
    nav_items_for(role).into_iter().map(|item| item.href).collect()
}

#[test]
fn admin_sees_every_tool() {
    assert_eq!(hrefs(Some(Role::Admin)), vec!["/dashboard", "/dashboard/rubric-generator", "/admin/uploads"]);
}

#[test]
fn teacher_sees_teaching_tools_but_not_admin_uploads() {
    assert_eq!(hrefs(Some(Role::Teacher)), vec!["/dashboard", "/dashboard/rubric-generator"]);
}

#[test]
fn student_sees_dashboard_only() {
    assert_eq!(hrefs(Some(Role::Student)), vec!["/dashboard"]);
}

#[test]
fn unknown_role_sees_nothing() {
    assert!(nav_items_for(None).is_empty());
}

#[test]
fn every_item_is_visible_to_some_role() {
    assert!(NAV_ITEMS.iter().all(|item| !item.roles.is_empty()));
}
