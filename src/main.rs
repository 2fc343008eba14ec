use yew_photo_album::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
