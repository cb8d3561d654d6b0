//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use todo_state::task::domain::Task;

#[then("the task list has {count:usize} entries")]
fn task_list_has_entries(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.session()?.count();
    eyre::ensure!(found == count, "expected {count} tasks, found {found}");
    Ok(())
}

#[then(r#"a reopened task list contains the task "{description}""#)]
fn reopened_list_contains(world: &TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let reopened = world.open_session();
    eyre::ensure!(
        reopened
            .tasks()
            .iter()
            .any(|task| task.description() == description),
        "reopened task list is missing '{description}'"
    );
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submit_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    eyre::ensure!(result.is_err(), "expected submission to be rejected");
    Ok(())
}

#[then(r#"the task "{description}" is done"#)]
fn task_is_done(world: &TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let done = world
        .session()?
        .tasks()
        .iter()
        .find(|task| task.description() == description)
        .is_some_and(Task::is_done);
    eyre::ensure!(done, "expected task '{description}' to be done");
    Ok(())
}
