//! Template assembly: token substitution and feature-conditional sections.

use super::features::{Feature, FeatureSet};
use super::naming::to_kebab_case;
use super::templates::{CLASS_TEMPLATE, STYLE_TEMPLATE};
use super::GeneratedFile;

/// Normalize a component selection: dedup by first occurrence, with the
/// mandatory "Button" entry always present in front.
pub fn normalize_selection(selected: &[String]) -> Vec<String> {
    let mut components = vec!["Button".to_string()];
    for name in selected {
        if !components.iter().any(|existing| existing == name) {
            components.push(name.clone());
        }
    }
    components
}

/// One import line per selected component, module path in kebab-case.
fn import_block(components: &[String]) -> String {
    components
        .iter()
        .map(|name| format!("import {} from '@baidu/cosmic/{}';", name, to_kebab_case(name)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `static components` registration object literal.
fn registration_block(components: &[String]) -> String {
    let registrations = components
        .iter()
        .map(|name| format!("        'cos-{}': {}", to_kebab_case(name), name))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("static components = {{\n{}\n    }};", registrations)
}

/// Doc-comment header: name line, then a description line when non-empty.
fn doc_comment(component_name: &str, description: &str) -> String {
    if description.is_empty() {
        format!("/**\n * {} 组件\n */\n", component_name)
    } else {
        format!("/**\n * {} 组件\n * {}\n */\n", component_name, description)
    }
}

/// Assemble from the fixed full-class template with import/registration
/// splicing. Style output is unconditional in this strategy.
///
/// Substitution order is an invariant: the `Props`/`State` renames run
/// before the `{{componentName}}` substitution, so a freshly substituted
/// name can never be prefixed a second time.
pub fn assemble_classic(
    component_name: &str,
    description: &str,
    selected: &[String],
) -> Vec<GeneratedFile> {
    let components = normalize_selection(selected);

    let mut code = CLASS_TEMPLATE.replace("{{imports}}", &import_block(&components));
    code = code.replace("{{components}}", &registration_block(&components));
    code = code.replace("Props", &format!("{}Props", component_name));
    code = code.replace("State", &format!("{}State", component_name));
    code = code.replace("{{componentName}}", component_name);
    code = format!("{}{}", doc_comment(component_name, description), code);

    let style = STYLE_TEMPLATE.replace("{{componentName}}", &to_kebab_case(component_name));

    vec![
        GeneratedFile {
            filename: format!("{}/index.ts", component_name),
            code,
        },
        GeneratedFile {
            filename: format!("{}/index.less", component_name),
            code: style,
        },
    ]
}

/// Assemble the feature-conditional declarative template: fixed segments
/// concatenated in declaration order, each gated by feature membership.
/// The style file is produced only when `style` is in the set.
pub fn assemble_declarative(
    component_name: &str,
    features: &FeatureSet,
    description: &str,
) -> Vec<GeneratedFile> {
    let kebab = to_kebab_case(component_name);
    let typescript = features.contains(Feature::Typescript);
    let store = features.contains(Feature::Store);

    let mut code = doc_comment(component_name, description);
    code.push_str("import san from 'san';\n");
    if store {
        code.push_str("import {connect} from 'san-store';\n");
    }
    if features.contains(Feature::Style) {
        code.push_str("import './index.less';\n");
    }
    code.push('\n');

    if typescript {
        code.push_str(&format!(
            "interface {name}Props {{\n    // 在这里定义组件的props类型\n}}\n\n\
             interface {name}State {{\n    // 在这里定义组件的state类型\n}}\n\n",
            name = component_name
        ));
    }

    if store {
        code.push_str("const connectStore = connect.san({\n    // 在这里映射store状态\n});\n\n");
    }

    if typescript {
        code.push_str(&format!(
            "const {name} = san.defineComponent<{name}Props, {name}State>({{\n",
            name = component_name
        ));
    } else {
        code.push_str(&format!(
            "const {} = san.defineComponent({{\n",
            component_name
        ));
    }

    if features.contains(Feature::Template) {
        code.push_str(&format!(
            "    template: /* html */`\n        <div class=\"{}\">\n            \
             <!-- 在这里编写组件模板 -->\n        </div>\n    `,\n",
            kebab
        ));
    } else {
        code.push_str("    template: '<div></div>',\n");
    }

    code.push('\n');
    if typescript {
        code.push_str(&format!(
            "    initData(): {}State {{\n        return {{\n            // 初始化组件状态\n        }};\n    }},\n",
            component_name
        ));
    } else {
        code.push_str(
            "    initData() {\n        return {\n            // 初始化组件状态\n        };\n    },\n",
        );
    }

    if features.contains(Feature::Computed) {
        code.push_str("\n    computed: {\n        // 在这里定义计算属性\n    },\n");
    }

    if features.contains(Feature::Lifecycle) {
        code.push_str(
            "\n    attached() {\n        // 组件挂载后执行\n    },\n\n    \
             detached() {\n        // 组件卸载前执行\n    },\n",
        );
    }

    code.push_str("});\n\n");

    if store {
        code.push_str(&format!(
            "const Connected{name} = connectStore({name});\n\nexport default Connected{name};\n",
            name = component_name
        ));
    } else {
        code.push_str(&format!("export default {};\n", component_name));
    }

    let mut files = vec![GeneratedFile {
        filename: format!("{}/index.ts", component_name),
        code,
    }];
    if features.contains(Feature::Style) {
        files.push(GeneratedFile {
            filename: format!("{}/index.less", component_name),
            code: STYLE_TEMPLATE.replace("{{componentName}}", &kebab),
        });
    }
    files
}
