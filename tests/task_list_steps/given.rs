//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_state::task::ports::KeyValueStore;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskListWorld) {
    world.session = Some(world.open_session());
}

#[given(r#"a task list with tasks "{first}" and "{second}""#)]
fn task_list_with_tasks(
    world: &mut TaskListWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let mut session = world.open_session();
    for description in [first, second] {
        session.on_description_change(description);
        session
            .submit()
            .wrap_err("submit task while seeding scenario")?;
    }
    world.session = Some(session);
    Ok(())
}

#[given(r#"stored task data "{raw}""#)]
fn stored_task_data(world: &mut TaskListWorld, raw: String) -> Result<(), eyre::Report> {
    world
        .storage
        .set("todos", &raw)
        .wrap_err("seed raw task snapshot")?;
    Ok(())
}
