pub const SYSTEM_INSTRUCTIONS: &str = r#"You are a helpful assistant that generates conventional commit messages.
You are a git and software engineering expert whose job it is to quickly investigate diffs for
staged code just prior to a commit and make suggestions for a git commit message."#;

/// `{patch}` is replaced verbatim with the staged diff.
pub const COMMIT_SUGGESTIONS_TEMPLATE: &str = r#"Generate exactly 5 different commit messages following Conventional Commits v1.0.0 specification.

FORMAT: <type>[optional scope]: <description>

TYPES:
- feat: new feature
- fix: bug fix
- docs: documentation
- style: code style/formatting
- refactor: code refactoring
- perf: performance improvement
- test: adding/updating tests
- build: build system changes
- ci: CI configuration
- chore: maintenance tasks

RULES:
1. Use imperative mood: 'add' not 'adds' or 'added'
2. No period at end
3. Keep under 50 characters when possible
4. Add scope when it clarifies context
5. Use ! for breaking changes: feat!: or feat(api)!:

EXAMPLES:
feat(auth): add OAuth2 integration
fix(api): prevent memory leak in parser
docs: update installation guide
perf(db): optimize query performance
feat!: remove deprecated login API

Git patch:
```
{patch}
```

Return exactly 5 commit messages, one per line, with no numbering, quotation marks, nor bullets:"#;
