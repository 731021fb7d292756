use billSplit::app::{reduce, AppState, Mode, SplitDraft};
use billSplit::{Action, FriendId, Payer, Roster};

fn sample() -> AppState {
    AppState::new(Roster::sample(), "https://i.pravatar.cc/48")
}

fn clark() -> FriendId {
    FriendId::from("118836")
}

fn run(state: AppState, actions: Vec<Action>) -> AppState {
    actions.into_iter().fold(state, reduce)
}

fn balance_of(state: &AppState, id: &FriendId) -> Option<i64> {
    state.roster.get(id).map(|f| f.balance)
}

fn split(bill: Option<i64>, paid: Option<i64>, payer: Payer) -> Vec<Action> {
    vec![
        Action::SelectFriend(clark()),
        Action::EditBill(bill),
        Action::EditUserPaid(paid),
        Action::SetPayer(payer),
        Action::SubmitSplit,
    ]
}

#[test]
fn user_pays_friend_owes_their_share() {
    let state = run(sample(), split(Some(100), Some(30), Payer::User));
    assert_eq!(balance_of(&state, &clark()), Some(63));
    assert_eq!(state.mode, Mode::Idle);
}

#[test]
fn friend_pays_user_owes_their_share() {
    let state = run(sample(), split(Some(100), Some(30), Payer::Friend));
    assert_eq!(balance_of(&state, &clark()), Some(-37));
}

#[test]
fn added_friend_starts_even_at_end_of_roster() {
    let state = run(
        sample(),
        vec![
            Action::ToggleAddForm,
            Action::EditName("Mia".into()),
            Action::SubmitAddFriend { id: FriendId::from("mia-1") },
        ],
    );
    assert_eq!(state.mode, Mode::Idle);
    let last = state.roster.at(state.roster.len() - 1).unwrap();
    assert_eq!(last.name, "Mia");
    assert_eq!(last.balance, 0);
    assert_eq!(last.image, "https://i.pravatar.cc/48?u=mia-1");
    assert_eq!(last.status_line(), "You are even with Mia");
}

#[test]
fn user_share_above_bill_keeps_previous_value() {
    let state = run(
        sample(),
        vec![
            Action::SelectFriend(clark()),
            Action::EditBill(Some(100)),
            Action::EditUserPaid(Some(20)),
            Action::EditUserPaid(Some(150)),
        ],
    );
    match &state.mode {
        Mode::Selected(session) => assert_eq!(session.draft.user_paid(), Some(20)),
        other => panic!("unexpected mode {:?}", other),
    }
}

#[test]
fn split_without_bill_changes_nothing() {
    let selected = run(sample(), vec![Action::SelectFriend(clark())]);
    let after = run(
        selected.clone(),
        vec![Action::EditUserPaid(Some(0)), Action::SubmitSplit],
    );
    assert_eq!(after.roster, selected.roster);
    assert_eq!(after.mode.selected_id(), Some(&clark()));

    let after = run(selected.clone(), vec![Action::EditBill(Some(50)), Action::SubmitSplit]);
    assert_eq!(after.roster, selected.roster);
    assert!(matches!(after.mode, Mode::Selected(_)));
}

#[test]
fn toggling_add_form_twice_is_a_round_trip() {
    let before = sample();
    let after = run(before.clone(), vec![Action::ToggleAddForm, Action::ToggleAddForm]);
    assert_eq!(before, after);
}

#[test]
fn selecting_same_friend_toggles() {
    let once = run(sample(), vec![Action::SelectFriend(clark())]);
    assert_eq!(once.mode.selected_id(), Some(&clark()));
    let twice = reduce(once, Action::SelectFriend(clark()));
    assert_eq!(twice.mode, Mode::Idle);
    let thrice = reduce(twice, Action::SelectFriend(clark()));
    match thrice.mode {
        Mode::Selected(session) => {
            assert_eq!(session.friend_id, clark());
            assert_eq!(session.draft, SplitDraft::new());
        }
        other => panic!("unexpected mode {:?}", other),
    }
}

#[test]
fn settlement_changes_exactly_one_friend() {
    let before = sample();
    for friend in before.roster.iter() {
        let after = run(
            before.clone(),
            vec![
                Action::SelectFriend(friend.id.clone()),
                Action::EditBill(Some(12)),
                Action::EditUserPaid(Some(5)),
                Action::SubmitSplit,
            ],
        );
        for (old, new) in before.roster.iter().zip(after.roster.iter()) {
            if old.id == friend.id {
                assert_eq!(new.balance, old.balance + 7);
            } else {
                assert_eq!(old, new);
            }
        }
    }
}

#[test]
fn selection_and_add_form_never_coexist() {
    let actions = vec![
        Action::SelectFriend(clark()),
        Action::ToggleAddForm,
        Action::SelectFriend(FriendId::from("933372")),
        Action::ToggleAddForm,
        Action::EditName("Ola".into()),
        Action::SubmitAddFriend { id: FriendId::from("ola") },
        Action::SelectHighlighted,
        Action::ToggleAddForm,
        Action::ToggleAddForm,
    ];
    let mut state = sample();
    for action in actions {
        state = reduce(state, action);
        let selected = state.mode.selected_id().is_some();
        assert!(!(selected && state.mode.is_adding_friend()));
    }
    assert_eq!(state.roster.len(), 4);
}

#[test]
fn rejected_add_keeps_form_values() {
    let state = run(
        sample(),
        vec![
            Action::ToggleAddForm,
            Action::EditImage("https://img.test/a".into()),
            Action::SubmitAddFriend { id: FriendId::from("x") },
        ],
    );
    match &state.mode {
        Mode::AddingFriend(form) => {
            assert_eq!(form.name, "");
            assert_eq!(form.image, "https://img.test/a");
        }
        other => panic!("unexpected mode {:?}", other),
    }
    assert_eq!(state.roster.len(), 3);
}

#[test]
fn lowering_bill_clamps_user_share() {
    let state = run(
        sample(),
        vec![
            Action::SelectFriend(clark()),
            Action::EditBill(Some(100)),
            Action::EditUserPaid(Some(80)),
            Action::EditBill(Some(50)),
            Action::SubmitSplit,
        ],
    );
    // user share clamped to 50, friend share 0
    assert_eq!(balance_of(&state, &clark()), Some(-7));
    assert_eq!(state.mode, Mode::Idle);
}
