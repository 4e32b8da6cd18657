use crate::models::result::SubmissionResult;
use crate::screens::{Presenter, Route, ScreenId};
use crate::state::SubscriptionBag;
use crate::validation::FormatValidator;
use crate::viewmodels::NicknameViewModel;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Modal sheet for creating a nickname.
///
/// On a successful save the `on_created` callback receives the nickname
/// before the sheet dismisses itself. Failures become alerts and leave the
/// sheet open.
pub struct NicknameScreen {
    vm: Arc<NicknameViewModel>,
    dismissed: Arc<AtomicBool>,
    _bag: SubscriptionBag,
}

impl NicknameScreen {
    pub fn new(
        validator: Arc<dyn FormatValidator>,
        presenter: Arc<dyn Presenter>,
        on_created: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        let vm = Arc::new(NicknameViewModel::new(validator));
        let dismissed = Arc::new(AtomicBool::new(false));
        let mut bag = SubscriptionBag::new();

        let p = presenter.clone();
        vm.on_nickname(move |text| p.nickname_preview(text)).store_in(&mut bag);

        let p = presenter.clone();
        vm.on_save_enabled(move |flag| p.button_changed(ScreenId::Nickname, flag))
            .store_in(&mut bag);

        let p = presenter;
        let done = dismissed.clone();
        vm.on_save_result(move |result| match result {
            SubmissionResult::Success(nickname) => {
                on_created(nickname);
                done.store(true, Ordering::SeqCst);
                p.navigate(Route::DismissNickname { saved: true });
            }
            SubmissionResult::Failure(err) => p.alert(err.title(), err.message()),
        })
        .store_in(&mut bag);

        Self {
            vm,
            dismissed,
            _bag: bag,
        }
    }

    pub fn nickname_changed(&self, text: Option<&str>) {
        self.vm.nickname_changed(text);
    }

    /// Clear button: null, then an empty insert.
    pub fn clear(&self) {
        self.vm.nickname_changed(None);
        self.vm.nickname_changed(Some(""));
    }

    pub fn save_tapped(&self) {
        self.vm.save_tapped();
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.load(Ordering::SeqCst)
    }

    pub fn view_model(&self) -> &NicknameViewModel {
        &self.vm
    }
}
