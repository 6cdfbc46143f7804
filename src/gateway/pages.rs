//! Inline HTML for the login flow. The sign viewer pages live elsewhere.

/// Login outcome shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    None,
    WrongPassword,
    SignedIn,
}

pub fn login_page(notice: LoginNotice) -> String {
    let body = match notice {
        LoginNotice::SignedIn => r#"<p class="ok">Signed in. Private signs are now visible.</p>
<form method="post" action="/logout"><button type="submit">Sign out</button></form>"#
            .to_string(),
        LoginNotice::None | LoginNotice::WrongPassword => {
            let error = if notice == LoginNotice::WrongPassword {
                r#"<p class="error" id="login-error">Wrong password.</p>"#
            } else {
                ""
            };
            format!(
                r#"{error}<form method="post" action="/login">
<label>Password <input type="password" name="password" autofocus></label>
<button type="submit">Sign in</button>
</form>"#
            )
        }
    };

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Sign in</title></head>
<body>
<h1>Sign in</h1>
{body}
</body>
</html>
"#
    )
}
