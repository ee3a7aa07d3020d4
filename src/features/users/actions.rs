//! The two operations of the users page. Both talk to the backend through
//! [`UsersApi`] and return an outcome the page applies to its
//! [`UserListState`](super::state::UserListState). Neither retries.

use crate::features::users::{
    client::UsersApi,
    prompt::{CONFIRM_DELETE_MESSAGE, DELETE_FAILED_MESSAGE, Prompt},
    state::{DeleteOutcome, LoadOutcome},
    types::User,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Fetches the user list once and classifies the response.
pub(crate) async fn load_users<A: UsersApi>(api: &A) -> LoadOutcome {
    match api.list_users().await {
        Ok(body) => {
            debug!(%body, "fetched user list");
            decode_user_list(body)
        }
        Err(err) => {
            error!(error = %err, "user list request failed");
            LoadOutcome::Failed(err)
        }
    }
}

/// Checks that the list body is an array; every element becomes a row.
pub(crate) fn decode_user_list(body: Value) -> LoadOutcome {
    let items = match body {
        Value::Array(items) => items,
        other => {
            warn!(kind = json_kind(&other), "user list body is not an array");
            return LoadOutcome::InvalidFormat;
        }
    };

    let users: Vec<User> = items.iter().map(User::from_json).collect();
    let without_id = users.iter().filter(|user| user.id.is_empty()).count();
    if without_id > 0 {
        warn!(without_id, "user list contains records without an id");
    }
    debug!(count = users.len(), "decoded user list");
    LoadOutcome::Loaded(users)
}

/// Asks for confirmation, then deletes `id` on the backend. The caller removes
/// the row only when this returns [`DeleteOutcome::Deleted`].
pub(crate) async fn delete_user<A: UsersApi, P: Prompt>(
    api: &A,
    prompt: &P,
    id: &str,
) -> DeleteOutcome {
    if !prompt.confirm(CONFIRM_DELETE_MESSAGE) {
        debug!(user_id = id, "delete declined");
        return DeleteOutcome::Declined;
    }

    match api.delete_user(id).await {
        Ok(()) => {
            info!(user_id = id, "user deleted");
            DeleteOutcome::Deleted(id.to_string())
        }
        Err(err) => {
            error!(user_id = id, error = %err, "delete request failed");
            prompt.alert(DELETE_FAILED_MESSAGE);
            DeleteOutcome::Failed(err)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_user_list, delete_user, load_users};
    use crate::{
        app_lib::AppError,
        features::users::{
            client::UsersApi,
            prompt::{CONFIRM_DELETE_MESSAGE, DELETE_FAILED_MESSAGE, Prompt},
            state::{
                DeleteOutcome, FETCH_FAILED_MESSAGE, INVALID_FORMAT_MESSAGE, LoadOutcome,
                TableBody, UserListState,
            },
        },
    };
    use serde_json::{Value, json};
    use std::cell::{Cell, RefCell};

    struct FakeApi {
        list: Result<Value, AppError>,
        delete_fails: bool,
        deleted: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn listing(body: Value) -> Self {
            Self {
                list: Ok(body),
                delete_fails: false,
                deleted: RefCell::new(Vec::new()),
            }
        }

        fn failing_list(err: AppError) -> Self {
            Self {
                list: Err(err),
                delete_fails: false,
                deleted: RefCell::new(Vec::new()),
            }
        }

        fn failing_delete() -> Self {
            Self {
                delete_fails: true,
                ..Self::listing(json!([]))
            }
        }
    }

    impl UsersApi for FakeApi {
        async fn list_users(&self) -> Result<Value, AppError> {
            self.list.clone()
        }

        async fn delete_user(&self, id: &str) -> Result<(), AppError> {
            self.deleted.borrow_mut().push(id.to_string());
            if self.delete_fails {
                Err(AppError::Http {
                    status: 500,
                    message: "Request failed.".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct FakePrompt {
        accept: bool,
        confirms: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
        asked: Cell<usize>,
    }

    impl FakePrompt {
        fn answering(accept: bool) -> Self {
            Self {
                accept,
                confirms: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
                asked: Cell::new(0),
            }
        }
    }

    impl Prompt for FakePrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.confirms.borrow_mut().push(message.to_string());
            self.accept
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn two_users() -> Value {
        json!([
            { "id": "1", "name": "Ann", "email": "ann@example.com", "age": 31 },
            { "id": "2", "name": "Bo", "email": "bo@example.com", "age": "27" }
        ])
    }

    async fn loaded_state(api: &FakeApi) -> UserListState {
        let mut state = UserListState::default();
        state.apply_load(load_users(api).await);
        state
    }

    #[tokio::test]
    async fn load_populates_rows_in_response_order() {
        let api = FakeApi::listing(two_users());

        let state = loaded_state(&api).await;

        let TableBody::Rows(rows) = state.body() else {
            panic!("expected rows");
        };
        let rendered: Vec<(usize, &str)> = rows
            .iter()
            .map(|row| (row.index, row.user.name.as_str()))
            .collect();
        assert_eq!(rendered, vec![(1, "Ann"), (2, "Bo")]);
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn load_with_object_body_is_invalid_format() {
        let api = FakeApi::listing(json!({ "users": [] }));

        let state = loaded_state(&api).await;

        assert!(state.users().is_empty());
        assert_eq!(state.error(), Some(INVALID_FORMAT_MESSAGE));
    }

    #[tokio::test]
    async fn load_with_null_body_is_invalid_format() {
        let api = FakeApi::listing(Value::Null);

        assert!(matches!(load_users(&api).await, LoadOutcome::InvalidFormat));
    }

    #[tokio::test]
    async fn failed_load_on_first_mount_leaves_list_empty() {
        let api = FakeApi::failing_list(AppError::Network("offline".to_string()));

        let state = loaded_state(&api).await;

        assert!(state.users().is_empty());
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
    }

    fn decoded_ids(body: Value) -> Vec<String> {
        match decode_user_list(body) {
            LoadOutcome::Loaded(users) => users.into_iter().map(|user| user.id).collect(),
            other => panic!("expected a loaded list, got {other:?}"),
        }
    }

    #[test]
    fn records_with_both_id_fields_load() {
        let ids = decoded_ids(json!([
            { "_id": "a1", "id": "a1", "name": "Ann", "email": "ann@example.com", "age": 31 }
        ]));
        assert_eq!(ids, vec!["a1"]);
    }

    #[test]
    fn unusual_field_types_still_load() {
        assert_eq!(
            decoded_ids(json!([{ "id": "1", "name": "Ann", "age": true }])),
            vec!["1"]
        );
        assert_eq!(decoded_ids(json!([{ "id": "1", "name": 42 }])), vec!["1"]);
    }

    #[test]
    fn record_without_id_keeps_every_row() {
        let mut state = UserListState::default();
        state.apply_load(decode_user_list(json!([
            { "id": "1" },
            { "id": "2" },
            { "name": "no id" }
        ])));

        assert_eq!(state.error(), None);
        let TableBody::Rows(rows) = state.body() else {
            panic!("expected rows");
        };
        let rendered: Vec<(usize, &str, &str)> = rows
            .iter()
            .map(|row| (row.index, row.user.id.as_str(), row.user.name.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![(1, "1", ""), (2, "2", ""), (3, "", "no id")]
        );
    }

    #[test]
    fn empty_array_is_a_valid_empty_list() {
        let outcome = decode_user_list(json!([]));
        assert!(matches!(outcome, LoadOutcome::Loaded(users) if users.is_empty()));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_row_after_success() {
        let api = FakeApi::listing(two_users());
        let prompt = FakePrompt::answering(true);
        let mut state = loaded_state(&api).await;

        let outcome = delete_user(&api, &prompt, "1").await;
        state.apply_delete(&outcome);

        assert!(matches!(outcome, DeleteOutcome::Deleted(ref id) if id == "1"));
        assert_eq!(api.deleted.borrow().as_slice(), ["1"]);
        assert_eq!(prompt.confirms.borrow().as_slice(), [CONFIRM_DELETE_MESSAGE]);
        assert!(prompt.alerts.borrow().is_empty());

        let TableBody::Rows(rows) = state.body() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].user.id, "2");
        assert_eq!(rows[0].user.name, "Bo");
    }

    #[tokio::test]
    async fn declined_delete_sends_no_request() {
        let api = FakeApi::listing(two_users());
        let prompt = FakePrompt::answering(false);
        let mut state = loaded_state(&api).await;
        let before = state.clone();

        let outcome = delete_user(&api, &prompt, "1").await;
        state.apply_delete(&outcome);

        assert!(matches!(outcome, DeleteOutcome::Declined));
        assert_eq!(prompt.asked.get(), 1);
        assert!(api.deleted.borrow().is_empty());
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_keeps_list() {
        let api = FakeApi::failing_delete();
        let prompt = FakePrompt::answering(true);
        let mut state = UserListState::default();
        state.apply_load(decode_user_list(two_users()));
        let before = state.clone();

        let outcome = delete_user(&api, &prompt, "2").await;
        state.apply_delete(&outcome);

        assert!(matches!(outcome, DeleteOutcome::Failed(AppError::Http { status: 500, .. })));
        assert_eq!(api.deleted.borrow().as_slice(), ["2"]);
        assert_eq!(prompt.alerts.borrow().as_slice(), [DELETE_FAILED_MESSAGE]);
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn blank_id_fails_without_touching_the_list() {
        struct PathCheckingApi;

        impl UsersApi for PathCheckingApi {
            async fn list_users(&self) -> Result<Value, AppError> {
                Ok(json!([]))
            }

            async fn delete_user(&self, id: &str) -> Result<(), AppError> {
                crate::features::users::client::delete_user_path(id).map(|_| ())
            }
        }

        let prompt = FakePrompt::answering(true);
        let outcome = delete_user(&PathCheckingApi, &prompt, " ").await;

        assert!(matches!(outcome, DeleteOutcome::Failed(AppError::Config(_))));
        assert_eq!(prompt.alerts.borrow().len(), 1);
    }
}
