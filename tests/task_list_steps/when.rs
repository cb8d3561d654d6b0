//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::when;

#[when("the task list is opened")]
fn task_list_opened(world: &mut TaskListWorld) {
    world.session = Some(world.open_session());
}

#[when(r#"the user submits the description "{description}""#)]
fn submit_description(
    world: &mut TaskListWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let session = world.session_mut()?;
    session.on_description_change(description);
    let result = session.submit();
    world.last_submit_result = Some(result);
    Ok(())
}

#[when(r#"the user toggles the task "{description}""#)]
fn toggle_task(world: &mut TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    world.session_mut()?.toggle(id);
    Ok(())
}

#[when(r#"the user deletes the task "{description}""#)]
fn delete_task(world: &mut TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    world.session_mut()?.delete(id);
    Ok(())
}
