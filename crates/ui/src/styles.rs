//! CSS styles for the UI

/// Stylesheet shared by the layout and every page
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
        color: #eee;
        min-height: 100%;
    }

    /* Main Container */
    .main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 40px;
        padding: 0 20px;
        background: linear-gradient(to right, #020617, #0f172a);
        border-bottom: 1px solid rgba(34, 211, 238, 0.2);
        user-select: none;
        flex-shrink: 0;
    }
    .title-text {
        font-size: 14px;
        font-weight: 500;
        color: #22d3ee;
    }
    .title-route {
        font-size: 12px;
        color: #9ca3af;
    }

    /* Tab Bar */
    .tab-bar {
        display: flex;
        gap: 4px;
        padding: 0 20px;
        background: linear-gradient(to right, rgba(15, 23, 42, 0.6), rgba(30, 41, 59, 0.6));
        border-bottom: 1px solid rgba(34, 211, 238, 0.1);
        flex-shrink: 0;
    }
    .tab-item {
        padding: 12px 24px;
        color: #9ca3af;
        text-decoration: none;
        font-size: 14px;
        font-weight: 500;
        border-bottom: 2px solid transparent;
        transition: all 0.15s;
        cursor: pointer;
    }
    .tab-item:hover {
        color: #22d3ee;
        background: rgba(34, 211, 238, 0.1);
    }
    .tab-item.tab-active {
        color: #22d3ee;
        border-bottom-color: #22d3ee;
        background: rgba(34, 211, 238, 0.1);
    }

    /* Content Area */
    .content-area {
        max-width: 1152px;
        margin: 0 auto;
        padding: 20px;
        flex: 1;
        display: flex;
        flex-direction: column;
        width: 100%;
    }

    /* Page Header */
    .header-box {
        text-align: center;
        margin-bottom: 16px;
        padding: 16px;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 12px;
        backdrop-filter: blur(4px);
    }
    .header-title {
        font-size: 24px;
        margin-bottom: 8px;
        color: #22d3ee;
        font-weight: bold;
    }
    .header-subtitle {
        font-size: 14px;
        color: #9ca3af;
    }

    /* Tool Cards */
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
        gap: 16px;
    }
    .tool-card {
        display: block;
        padding: 16px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(34, 211, 238, 0.1);
        border-radius: 12px;
        color: #e5e7eb;
        text-decoration: none;
        transition: all 0.15s;
    }
    .tool-card:hover {
        border-color: rgba(34, 211, 238, 0.5);
        background: rgba(34, 211, 238, 0.1);
    }
    .tool-card-title {
        font-size: 16px;
        font-weight: 600;
        color: #22d3ee;
        margin-bottom: 6px;
    }
    .tool-card-text {
        font-size: 13px;
        color: #9ca3af;
    }
    .tool-card-path {
        margin-top: 10px;
        font-family: 'Consolas', monospace;
        font-size: 12px;
        color: #a855f7;
    }

    /* Not Found */
    .not-found-path {
        font-family: 'Consolas', monospace;
        color: #f87171;
    }
    .btn {
        display: inline-block;
        margin-top: 16px;
        padding: 10px 20px;
        border-radius: 8px;
        font-weight: 500;
        text-decoration: none;
    }
    .btn-primary {
        background: #0891b2;
        color: white;
    }
    .btn-primary:hover {
        background: #06b6d4;
    }
"#;
