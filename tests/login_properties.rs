use formflow::{ErrorKind, LoginViewModel, NicknameViewModel, RuleSet, SubmissionResult};
use parking_lot::Mutex;
use std::sync::Arc;

const SAMPLES: &[Option<&str>] = &[
    None,
    Some(""),
    Some(" "),
    Some("abc"),
    Some("user@sopt.org"),
    Some("abcd123!"),
    Some("진웅"),
];

fn non_empty(v: Option<&str>) -> bool {
    v.is_some_and(|s| !s.is_empty())
}

#[derive(Clone, Copy, Debug)]
enum Order {
    IdentifierFirst,
    PasswordFirst,
}

fn enabled_after_writes(id: Option<&str>, pw: Option<&str>, order: Order) {
    let vm = LoginViewModel::new(Arc::new(RuleSet::default()));
    let last = Arc::new(Mutex::new(None));
    let l = last.clone();
    let _sub = vm.on_login_enabled(move |b| *l.lock() = Some(b));

    match order {
        Order::IdentifierFirst => {
            vm.identifier_changed(id);
            assert_eq!(*last.lock(), Some(false), "password still empty");
            vm.password_changed(pw);
        }
        Order::PasswordFirst => {
            vm.password_changed(pw);
            assert_eq!(*last.lock(), Some(false), "identifier still empty");
            vm.identifier_changed(id);
        }
    }

    let expected = non_empty(id) && non_empty(pw);
    assert_eq!(*last.lock(), Some(expected), "id={id:?} pw={pw:?} order={order:?}");
    assert_eq!(vm.is_login_enabled(), expected);
}

#[test]
fn enabled_matches_both_fields_for_every_pair() {
    for id in SAMPLES {
        for pw in SAMPLES {
            enabled_after_writes(*id, *pw, Order::IdentifierFirst);
        }
    }
}

#[test]
fn enabled_matches_both_fields_in_reverse_write_order() {
    for id in SAMPLES {
        for pw in SAMPLES {
            enabled_after_writes(*id, *pw, Order::PasswordFirst);
        }
    }
}

#[test]
fn identifier_is_checked_before_password() {
    for pw in SAMPLES.iter().flatten() {
        let vm = LoginViewModel::new(Arc::new(RuleSet::default()));
        vm.identifier_changed(Some(""));
        vm.password_changed(Some(*pw));
        assert_eq!(
            vm.login_result(),
            SubmissionResult::Failure(ErrorKind::InvalidIdentifier),
            "pw={pw:?}"
        );
    }
}

#[test]
fn result_is_stable_across_resubmits() {
    for id in SAMPLES {
        for pw in SAMPLES {
            let vm = LoginViewModel::new(Arc::new(RuleSet::default()));
            vm.identifier_changed(*id);
            vm.password_changed(*pw);

            let seen = Arc::new(Mutex::new(Vec::new()));
            let s = seen.clone();
            let _sub = vm.on_login_result(move |r| s.lock().push(r));
            vm.login_tapped();
            vm.login_tapped();

            let seen = seen.lock();
            assert_eq!(seen.len(), 2);
            assert_eq!(seen[0], seen[1]);
        }
    }
}

#[test]
fn nickname_enabled_matches_field() {
    for nick in SAMPLES {
        let vm = NicknameViewModel::new(Arc::new(RuleSet::default()));
        vm.nickname_changed(*nick);
        assert_eq!(vm.is_save_enabled(), non_empty(*nick));

        let expected = match nick {
            None => SubmissionResult::Failure(ErrorKind::Unknown),
            Some(n) if ["abc", "진웅"].contains(n) => SubmissionResult::Success(n.to_string()),
            Some(_) => SubmissionResult::Failure(ErrorKind::InvalidNickname),
        };
        assert_eq!(vm.save_result(), expected, "nick={nick:?}");
    }
}
