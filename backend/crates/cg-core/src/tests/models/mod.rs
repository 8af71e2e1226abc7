mod issue;
mod issue_filter;
mod language_code;
