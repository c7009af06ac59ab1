use aula_admin_core::app::courses::CoursesPage;
use aula_admin_core::app::enrollments::EnrollmentsPage;
use aula_admin_core::app::users::UsersPage;
use aula_admin_core::client::NoWasmClient;
use aula_admin_core::endpoints::Endpoints;
use aula_admin_core::error::Result;
use aula_admin_core::forms::{CourseForm, FormErrors, UserForm};
use aula_admin_core::interface::RequestApi;
use aula_admin_core::model::structs::{Notice, User};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let endpoints = match args.len() {
        1 => Endpoints::from_env(),
        3 => Endpoints::new(args[1].clone(), args[2].clone()),
        _ => {
            println!("Uso: {} [usuarios_base_url cursos_base_url]", args[0]);
            return Ok(());
        }
    };

    let client = NoWasmClient::with_endpoints(endpoints)?;
    let mut users_page = UsersPage::new();
    let mut courses_page = CoursesPage::new();
    let mut enrollments_page = EnrollmentsPage::new();

    println!("Gestión Académica - consola de administración");
    loop {
        println!();
        println!("1) Usuarios  2) Cursos  3) Inscripciones  q) Salir");
        match prompt("Opción")?.as_str() {
            "1" => usuarios_menu(&client, &mut users_page).await?,
            "2" => cursos_menu(&client, &mut courses_page).await?,
            "3" => inscripciones_menu(&client, &mut enrollments_page).await?,
            "q" | "Q" => break,
            other => println!("Opción no reconocida: {other}"),
        }
    }

    Ok(())
}

async fn usuarios_menu<C: RequestApi>(client: &C, page: &mut UsersPage) -> Result<()> {
    page.load(client).await;
    loop {
        println!();
        println!("================Usuarios================");
        print_notice(&page.notice);
        print_users(&page.users);
        println!("n) Nuevo  e) Editar  d) Eliminar  r) Recargar  v) Volver");
        match prompt("Opción")?.as_str() {
            "n" => {
                page.cancel_edit();
                fill_user_form(&mut page.form)?;
                page.submit(client).await;
                print_form_errors(&page.form.errors);
            }
            "e" => {
                let Some(id) = prompt_id("Id del usuario")? else {
                    continue;
                };
                let Some(user) = page.users.iter().find(|u| u.id == Some(id)).cloned() else {
                    println!("Usuario no encontrado: {id}");
                    continue;
                };
                page.edit(&user);
                fill_user_form(&mut page.form)?;
                page.submit(client).await;
                print_form_errors(&page.form.errors);
            }
            "d" => {
                let Some(id) = prompt_id("Id del usuario")? else {
                    continue;
                };
                if confirm("¿Estás seguro de que deseas eliminar este usuario?")? {
                    page.delete(client, id).await;
                }
            }
            "r" => page.load(client).await,
            "v" => break,
            other => println!("Opción no reconocida: {other}"),
        }
    }
    Ok(())
}

async fn cursos_menu<C: RequestApi>(client: &C, page: &mut CoursesPage) -> Result<()> {
    page.load(client).await;
    loop {
        println!();
        println!("=================Cursos=================");
        print_notice(&page.notice);
        for course in &page.courses {
            println!(
                "{:<5} {:<25} créditos: {:<3} inscritos: {}",
                display_id(course.id),
                course.nombre,
                course.creditos,
                course.curso_usuarios.len()
            );
        }
        println!("n) Nuevo  e) Editar  d) Eliminar  r) Recargar  v) Volver");
        match prompt("Opción")?.as_str() {
            "n" => {
                page.cancel_edit();
                fill_course_form(&mut page.form)?;
                page.submit(client).await;
                print_form_errors(&page.form.errors);
            }
            "e" => {
                let Some(id) = prompt_id("Id del curso")? else {
                    continue;
                };
                let Some(course) = page.courses.iter().find(|c| c.id == Some(id)).cloned() else {
                    println!("Curso no encontrado: {id}");
                    continue;
                };
                page.edit(&course);
                fill_course_form(&mut page.form)?;
                page.submit(client).await;
                print_form_errors(&page.form.errors);
            }
            "d" => {
                let Some(id) = prompt_id("Id del curso")? else {
                    continue;
                };
                if confirm("¿Estás seguro de que deseas eliminar este curso?")? {
                    page.delete(client, id).await;
                }
            }
            "r" => page.load(client).await,
            "v" => break,
            other => println!("Opción no reconocida: {other}"),
        }
    }
    Ok(())
}

async fn inscripciones_menu<C: RequestApi>(client: &C, page: &mut EnrollmentsPage) -> Result<()> {
    page.load(client).await;
    loop {
        println!();
        println!("==============Inscripciones=============");
        print_notice(&page.notice);
        for course in &page.courses {
            println!(
                "{:<5} {:<25} {} usuarios",
                display_id(course.id),
                course.nombre,
                course.curso_usuarios.len()
            );
            if course.curso_usuarios.is_empty() {
                println!("      No hay usuarios inscritos en este curso.");
            }
            for link in &course.curso_usuarios {
                println!(
                    "      {:<30} (usuario {})",
                    page.user_name(link.usuario_id),
                    link.usuario_id
                );
            }
        }
        println!("i) Inscribir  x) Eliminar inscripción  r) Recargar  v) Volver");
        match prompt("Opción")?.as_str() {
            "i" => {
                print_users(&page.users);
                let Some(usuario_id) = prompt_id("Id del usuario")? else {
                    continue;
                };
                page.select_usuario(Some(usuario_id));
                for choice in page.course_choices(page.selected_usuario) {
                    println!("{:<5} {}", choice.curso_id, choice.label);
                }
                let Some(curso_id) = prompt_id("Id del curso")? else {
                    continue;
                };
                page.select_curso(Some(curso_id));
                page.enroll(client).await;
            }
            "x" => {
                let Some(curso_id) = prompt_id("Id del curso")? else {
                    continue;
                };
                let Some(usuario_id) = prompt_id("Id del usuario")? else {
                    continue;
                };
                if confirm("¿Estás seguro de que deseas eliminar esta inscripción?")? {
                    page.remove(client, curso_id, usuario_id).await;
                }
            }
            "r" => page.load(client).await,
            "v" => break,
            other => println!("Opción no reconocida: {other}"),
        }
    }
    Ok(())
}

fn fill_user_form(form: &mut UserForm) -> Result<()> {
    let nombre = prompt_or_keep("Nombre", &form.nombre)?;
    form.set_nombre(&nombre);
    let apellido = prompt_or_keep("Apellido", &form.apellido)?;
    form.set_apellido(&apellido);
    let email = prompt_or_keep("Email", &form.email)?;
    form.set_email(&email);
    let telefono = prompt_or_keep("Teléfono", &form.telefono)?;
    form.set_telefono(&telefono);
    let fecha = prompt_or_keep("Fecha de nacimiento (AAAA-MM-DD)", &form.fecha_nacimiento)?;
    form.set_fecha_nacimiento(&fecha);
    Ok(())
}

fn fill_course_form(form: &mut CourseForm) -> Result<()> {
    let nombre = prompt_or_keep("Nombre", &form.nombre)?;
    form.set_nombre(&nombre);
    let descripcion = prompt_or_keep("Descripción", &form.descripcion)?;
    form.set_descripcion(&descripcion);
    let creditos = prompt_or_keep("Créditos", &form.creditos.to_string())?;
    form.set_creditos(creditos.parse().unwrap_or(0));
    Ok(())
}

fn print_users(users: &[User]) {
    for user in users {
        println!(
            "{:<5} {:<15} {:<15} {:<28} {:<12} {}",
            display_id(user.id),
            user.nombre,
            user.apellido,
            user.email,
            user.telefono,
            user.fecha_nacimiento
        );
    }
}

fn print_notice(notice: &Option<Notice>) {
    match notice {
        Some(Notice::Success(message)) => println!("[OK] {message}"),
        Some(Notice::Error(message)) => println!("[ERROR] {message}"),
        None => {}
    }
}

fn print_form_errors(errors: &FormErrors) {
    if errors.is_empty() {
        return;
    }
    println!("Corrija los siguientes campos:");
    for (field, message) in errors {
        println!("  {field}: {message}");
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_string(), |i| i.to_string())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Empty input keeps the current value (shown in brackets when set).
fn prompt_or_keep(label: &str, current: &str) -> Result<String> {
    let input = if current.is_empty() {
        prompt(label)?
    } else {
        prompt(&format!("{label} [{current}]"))?
    };
    Ok(if input.is_empty() {
        current.to_string()
    } else {
        input
    })
}

fn prompt_id(label: &str) -> Result<Option<i64>> {
    let input = prompt(label)?;
    match input.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Id inválido: {input}");
            Ok(None)
        }
    }
}

fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} (s/n)"))?;
    Ok(answer.eq_ignore_ascii_case("s"))
}
