//! # ReadmeGen Section Templates
//!
//! File: cli/src/commands/generate/templates.rs
//!
//! Built-in Tera sources for every README section, keyed by template name.
//! The composer renders each one against the same context; variables that
//! may be absent (`description`, `install`, `test_command`, ...) are only
//! printed inside `{% if %}` guards. Trailing whitespace is trimmed by the
//! composer, so sources do not need to end with a newline.
//!

pub const SECTION_TEMPLATES: &[(&str, &str)] = &[
    ("title.md", "# {{ name }}"),
    ("description.md", "{{ description }}"),
    ("badges.md", "{{ badges }}"),
    (
        "table_of_contents.md",
        r##"## Table of Contents

{% for entry in toc %}- [{{ entry.title }}](#{{ entry.anchor }})
{% endfor %}"##,
    ),
    (
        "about.md",
        r##"## About

{{ name }} is a {{ ecosystem_label }} project{% if version %} (version {{ version }}){% endif %}.{% if description %} {{ description }}{% endif %}"##,
    ),
    (
        "features.md",
        r##"## Features

- Feature 1: Describe a key feature of {{ name }}
- Feature 2: Describe another key feature
- Feature 3: Describe what makes this project useful"##,
    ),
    (
        "prerequisites.md",
        r##"## Prerequisites

{% if prerequisite %}- {{ prerequisite }}{% else %}No special prerequisites.{% endif %}"##,
    ),
    (
        "installation.md",
        r##"## Installation

{% if install %}```bash
{{ install }}
```{% else %}Installation instructions coming soon.{% endif %}"##,
    ),
    (
        "usage.md",
        r##"## Usage

{% if run %}```bash
{{ run }}
```{% else %}Usage instructions coming soon.{% endif %}"##,
    ),
    (
        "examples.md",
        r##"## Examples

{% if run %}```bash
{{ run }}
```

{% endif %}Add examples of common use cases here."##,
    ),
    (
        "scripts.md",
        r##"## Available Scripts

{% for script, command in scripts %}- **{{ script }}**: `{{ command }}`
{% endfor %}"##,
    ),
    (
        "api_documentation.md",
        r##"## API Documentation

{% if api_docs %}Generate the API reference locally:

```bash
{{ api_docs }}
```

{% endif %}Document the public API of {{ name }} here."##,
    ),
    (
        "project_structure.md",
        r##"## Project Structure

```
{{ file_tree }}```"##,
    ),
    (
        "development.md",
        r##"## Development

{% if has_tests %}### Running Tests

{% if test_command %}```bash
{{ test_command }}
```{% else %}Run the test suite with the project's test runner.{% endif %}

{% endif %}### Contributing

Contributions are welcome! Please feel free to submit a Pull Request."##,
    ),
    (
        "deployment.md",
        r##"## Deployment

{% if build_command %}Build for production:

```bash
{{ build_command }}
```

{% endif %}Add notes about how to deploy {{ name }} to a live system."##,
    ),
    (
        "troubleshooting.md",
        r##"## Troubleshooting

If something does not work as expected:

{% if install %}- Reinstall dependencies with `{{ install }}`
{% endif %}- Check that your toolchain version is supported
- Search the existing issues or open a new one with steps to reproduce"##,
    ),
    (
        "roadmap.md",
        r##"## Roadmap

- [ ] Add more features
- [ ] Improve documentation
- [ ] Increase test coverage"##,
    ),
    (
        "changelog.md",
        r##"## Changelog

### {% if version %}{{ version }}{% else %}Unreleased{% endif %}

- Initial release"##,
    ),
    (
        "authors.md",
        r##"## Authors

- {{ author }}"##,
    ),
    (
        "acknowledgments.md",
        r##"## Acknowledgments

- Thanks to everyone who has contributed to {{ name }}"##,
    ),
    (
        "license.md",
        r##"## License

{% if short_license %}{{ license }}{% else %}This project is licensed under the {{ license }} License.{% endif %}"##,
    ),
];
