//! Fixed template bodies.
//!
//! Markers: `{{imports}}` and `{{components}}` are block markers filled
//! from the component selection; `{{componentName}}` is substituted with
//! the literal component name (the style template substitutes its
//! kebab-case form). The bare `Props`/`State` tokens in the class template
//! are renamed to `<Name>Props`/`<Name>State` during assembly.

/// Full-class component template (assembly strategy with catalog splicing).
pub const CLASS_TEMPLATE: &str = r#"import { Component } from 'san';
import Button from '@baidu/cosmic/button';
import './index.less';
// 导入cosmic组件
{{imports}}

interface Props {
    // 在这里定义组件的props类型
}

interface State {
    // 在这里定义组件的state类型
}

export default class {{componentName}} extends Component<Props, State> {
    static template = /* html */`
        <div class="{{componentName}}">
            <!-- Button组件使用示例 -->
            <cos-button type="primary" on-click="handleClick">点击按钮</cos-button>
            
            <!-- 在这里编写组件模板 -->
        </div>
    `;

    // 注册cosmic组件
    static components = {
        'cos-button': Button
    };
    {{components}}

    initData(): State {
        return {
            // 初始化组件状态
        };
    }

    handleClick(): void {
        // 按钮点击处理
        console.log('按钮被点击');
    }

    // 在这里添加组件方法
}"#;

/// Stylesheet template. The root selector is the component's kebab-case name.
pub const STYLE_TEMPLATE: &str = r#"
.{{componentName}} {
    /* 在这里编写组件样式 */
    display: flex;
    justify-content: space-between;
    padding: 16px;

    :global(.cos-button) {
        // cosmic样式覆盖
    }
}"#;
