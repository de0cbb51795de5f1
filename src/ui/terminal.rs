//! 终端会话
//!
//! 事件循环：加载初始列表 → 渲染 → 逐行读取姓名和年龄 → 提交 → 重新渲染，
//! 直到输入结束或读到 `:q`

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::clients::UserApi;
use crate::error::AppResult;
use crate::models::FormInput;
use crate::ui::render;
use crate::workflow::SubmissionController;

/// 退出命令
pub const QUIT_COMMAND: &str = ":q";

/// 运行一次终端会话
///
/// 初始列表加载完成之后才开始接受输入，因此首次提交不会被晚到的列表覆盖
pub async fn run_session<A, R, W>(
    controller: &mut SubmissionController<A>,
    reader: R,
    mut writer: W,
) -> AppResult<()>
where
    A: UserApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    controller.load_initial_list().await;
    draw(controller, &mut writer).await?;

    let mut lines = reader.lines();
    loop {
        let Some(name) = prompt(&mut lines, &mut writer, "Name").await? else {
            break;
        };
        let Some(age) = prompt(&mut lines, &mut writer, "Age").await? else {
            break;
        };

        let outcome = controller.submit(FormInput::new(name, age)).await;
        debug!("提交结果: {:?}", outcome);
        draw(controller, &mut writer).await?;
    }

    info!("会话结束，共展示 {} 个用户", controller.users().len());
    Ok(())
}

/// 读取一个字段；输入结束或退出命令返回 `None`
async fn prompt<R, W>(
    lines: &mut tokio::io::Lines<R>,
    writer: &mut W,
    label: &str,
) -> AppResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}> ", label).as_bytes()).await?;
    writer.flush().await?;

    match lines.next_line().await? {
        Some(line) if line.trim() == QUIT_COMMAND => Ok(None),
        Some(line) => Ok(Some(line.trim_end_matches('\r').to_string())),
        None => Ok(None),
    }
}

async fn draw<A, W>(controller: &SubmissionController<A>, writer: &mut W) -> AppResult<()>
where
    A: UserApi,
    W: AsyncWrite + Unpin,
{
    let page = render::render_page(controller.form(), controller.users());
    writer.write_all(b"\n").await?;
    writer.write_all(page.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
