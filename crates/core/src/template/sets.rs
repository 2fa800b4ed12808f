use crate::types::ArtifactKind;

/// One file in a template set. Both the relative path and the body may
/// contain `{{token}}` substitution sites.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub rel_path: &'static str,
    pub body: &'static str,
}

const DIRECTIVE_TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        rel_path: "{{fileName}}.directive.ts",
        body: r#"import { Directive } from '@angular/core';

@Directive({
  selector: '[{{selector}}]',
  standalone: true,
})
export class {{className}} {}
"#,
    },
    TemplateFile {
        rel_path: "{{fileName}}.directive.spec.ts",
        body: r#"import { {{className}} } from './{{fileName}}.directive';

describe('{{className}}', () => {
  it('should create an instance', () => {
    const directive = new {{className}}();
    expect(directive).toBeTruthy();
  });
});
"#,
    },
];

const COMPONENT_TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        rel_path: "{{fileName}}.component.ts",
        body: r#"import { Component } from '@angular/core';

@Component({
  selector: '{{selector}}',
  standalone: true,
  templateUrl: './{{fileName}}.component.html',
})
export class {{className}} {}
"#,
    },
    TemplateFile {
        rel_path: "{{fileName}}.component.html",
        body: "<p>{{fileName}} works!</p>\n",
    },
    TemplateFile {
        rel_path: "{{fileName}}.component.spec.ts",
        body: r#"import { TestBed } from '@angular/core/testing';

import { {{className}} } from './{{fileName}}.component';

describe('{{className}}', () => {
  beforeEach(async () => {
    await TestBed.configureTestingModule({
      imports: [{{className}}],
    }).compileComponents();
  });

  it('should create', () => {
    const fixture = TestBed.createComponent({{className}});
    expect(fixture.componentInstance).toBeTruthy();
  });
});
"#,
    },
];

pub fn template_set(kind: ArtifactKind) -> &'static [TemplateFile] {
    match kind {
        ArtifactKind::Directive => DIRECTIVE_TEMPLATES,
        ArtifactKind::Component => COMPONENT_TEMPLATES,
    }
}
