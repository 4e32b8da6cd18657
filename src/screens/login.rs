use crate::error::{AppError, AppResult};
use crate::models::field::FieldKind;
use crate::models::result::SubmissionResult;
use crate::screens::{NicknameScreen, Presenter, Route, ScreenId};
use crate::state::SubscriptionBag;
use crate::validation::FormatValidator;
use crate::viewmodels::LoginViewModel;
use parking_lot::Mutex;
use std::sync::Arc;

/// Root screen. Owns the login form and, while it is presented, the nickname
/// sheet.
pub struct LoginScreen {
    vm: Arc<LoginViewModel>,
    validator: Arc<dyn FormatValidator>,
    presenter: Arc<dyn Presenter>,
    /// Filled by the nickname sheet, read on login success
    nickname: Arc<Mutex<Option<String>>>,
    secure_entry: bool,
    sheet: Option<NicknameScreen>,
    _bag: SubscriptionBag,
}

impl LoginScreen {
    pub fn new(validator: Arc<dyn FormatValidator>, presenter: Arc<dyn Presenter>) -> Self {
        let vm = Arc::new(LoginViewModel::new(validator.clone()));
        let nickname: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let mut bag = SubscriptionBag::new();

        let p = presenter.clone();
        vm.on_login_enabled(move |flag| p.button_changed(ScreenId::Login, flag))
            .store_in(&mut bag);

        let p = presenter.clone();
        let nick = nickname.clone();
        vm.on_login_result(move |result| match result {
            SubmissionResult::Success(identifier) => p.navigate(Route::Welcome {
                identifier,
                nickname: nick.lock().clone(),
            }),
            SubmissionResult::Failure(err) => p.alert(err.title(), err.message()),
        })
        .store_in(&mut bag);

        Self {
            vm,
            validator,
            presenter,
            nickname,
            secure_entry: true,
            sheet: None,
            _bag: bag,
        }
    }

    pub fn identifier_changed(&self, text: Option<&str>) {
        self.vm.identifier_changed(text);
    }

    pub fn password_changed(&self, text: Option<&str>) {
        self.vm.password_changed(text);
    }

    pub fn login_tapped(&self) {
        self.vm.login_tapped();
    }

    /// Routes a text change to the field's screen. Nickname edits need the
    /// sheet to be open.
    pub fn field_changed(&self, field: FieldKind, text: Option<&str>) -> AppResult<()> {
        match field {
            FieldKind::Identifier => self.identifier_changed(text),
            FieldKind::Password => self.password_changed(text),
            FieldKind::Nickname => self.sheet()?.nickname_changed(text),
        }
        Ok(())
    }

    /// Clear button: null, then an empty insert.
    pub fn clear(&self, field: FieldKind) -> AppResult<()> {
        if field == FieldKind::Nickname {
            self.sheet()?.clear();
            return Ok(());
        }
        self.field_changed(field, None)?;
        self.field_changed(field, Some(""))
    }

    /// Flips password masking and returns the new state.
    pub fn toggle_secure_entry(&mut self) -> bool {
        self.secure_entry = !self.secure_entry;
        self.secure_entry
    }

    pub fn set_secure_entry(&mut self, on: bool) {
        self.secure_entry = on;
    }

    pub fn is_secure_entry(&self) -> bool {
        self.secure_entry
    }

    pub fn present_nickname(&mut self) -> AppResult<()> {
        if self.sheet.is_some() {
            return Err(AppError::Usage("the nickname sheet is already open".into()));
        }

        let slot = self.nickname.clone();
        let on_created = move |nickname: String| {
            tracing::info!(%nickname, "nickname handed back to login");
            *slot.lock() = Some(nickname);
        };
        let sheet = NicknameScreen::new(self.validator.clone(), self.presenter.clone(), on_created);
        self.presenter.navigate(Route::PresentNickname);
        self.sheet = Some(sheet);
        Ok(())
    }

    pub fn save_nickname(&mut self) -> AppResult<()> {
        self.sheet()?.save_tapped();
        if self.sheet.as_ref().is_some_and(NicknameScreen::is_dismissed) {
            self.sheet = None;
        }
        Ok(())
    }

    /// Dismisses the sheet without saving.
    pub fn close_nickname(&mut self) -> AppResult<()> {
        if self.sheet.take().is_none() {
            return Err(AppError::NoScreen("nickname"));
        }
        self.presenter.navigate(Route::DismissNickname { saved: false });
        Ok(())
    }

    pub fn nickname(&self) -> Option<String> {
        self.nickname.lock().clone()
    }

    pub fn sheet(&self) -> AppResult<&NicknameScreen> {
        self.sheet.as_ref().ok_or(AppError::NoScreen("nickname"))
    }

    pub fn has_sheet(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn view_model(&self) -> &LoginViewModel {
        &self.vm
    }
}
